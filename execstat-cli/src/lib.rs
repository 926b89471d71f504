#![warn(missing_docs)]
//! execstat CLI Library
//!
//! Reads timing result files and prints the max, average and min of their
//! execution durations.
//!
//! # Example
//!
//! ```text
//! $ execstat results/mm_7tpcs.json
//! max: 500.00
//! avg: 350.00
//! min: 200.00
//! ```
//!
//! Directories expand to the `*.json` files inside them, and `--format json`
//! or `--format csv` emit the full statistics.

mod config;
mod pipeline;
mod planner;

pub use config::*;
pub use pipeline::{
    ExtractionResult, build_report, compute_statistics, extract_all, extract_file,
    format_human_output,
};
pub use planner::{InputPlan, build_plan};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use execstat_input::{ExtractOptions, PairMode};
use execstat_report::{OutputFormat, Report, generate_csv_report, generate_json_report};
use rayon::ThreadPoolBuilder;
use regex::Regex;
use std::io::Write;
use std::path::{Path, PathBuf};

/// execstat CLI arguments
#[derive(Parser, Debug)]
#[command(name = "execstat")]
#[command(author, version, about = "Summarize execution durations in timing result files")]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
#[command(after_help = "A result file named `init` must be given with a path prefix, e.g. `./init`.")]
pub struct Cli {
    /// Optional subcommand; defaults to summarizing PATHS
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Result files, or directories of *.json result files
    /// (a file named `init` must be passed as `./init`)
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Entry key holding the timestamps [default: execute_times]
    #[arg(short = 'k', long)]
    pub times_key: Option<String>,

    /// Timestamp pairing: first, all [default: first]
    #[arg(long)]
    pub pairs: Option<PairMode>,

    /// Multiplier applied to each end - start difference [default: 1000]
    #[arg(long)]
    pub scale: Option<f64>,

    /// Decimal places in human and csv output [default: 2]
    #[arg(long)]
    pub precision: Option<usize>,

    /// Output format: human, json, csv [default: human]
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only process files whose path matches this regex
    #[arg(long)]
    pub filter: Option<String>,

    /// Configuration file (default: discover execstat.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Threads for multi-file runs; 0 = all cores
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default execstat.toml
    Init {
        /// Where to write the file
        #[arg(default_value = CONFIG_FILE_NAME)]
        path: PathBuf,
    },
}

/// Settings after layering defaults → execstat.toml → CLI flags
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Extraction options
    pub extract: ExtractOptions,
    /// Output format
    pub format: OutputFormat,
    /// Decimal places for text output
    pub precision: usize,
    /// Rayon threads (0 = default pool)
    pub threads: usize,
}

impl RunSettings {
    /// Resolve settings; CLI flags win over config values
    pub fn resolve(cli: &Cli, config: &ExecstatConfig) -> anyhow::Result<Self> {
        let mut extract = config.extract_options();
        if let Some(key) = &cli.times_key {
            extract.times_key = key.clone();
        }
        if let Some(pairs) = cli.pairs {
            extract.pairs = pairs;
        }
        if let Some(scale) = cli.scale {
            extract.scale = scale;
        }
        if !extract.scale.is_finite() {
            bail!("scale must be a finite number, got {}", extract.scale);
        }
        if extract.times_key.is_empty() {
            bail!("times key must not be empty");
        }

        let format = match cli.format {
            Some(format) => format,
            None => config
                .output
                .format
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))
                .context("invalid [output] format in configuration")?,
        };

        Ok(Self {
            extract,
            format,
            precision: cli.precision.unwrap_or(config.output.precision),
            threads: cli.threads.unwrap_or(config.runner.threads),
        })
    }
}

/// Run the execstat CLI with process arguments.
///
/// # Returns
/// Returns `Ok(())` on success, or an error if any input cannot be summarized.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the execstat CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Init { ref path }) => write_default_config(path),
        None => summarize(&cli),
    }
}

/// Logs go to stderr; stdout carries only the report
fn init_logging(verbose: bool) {
    let filter = if verbose {
        "execstat=debug"
    } else {
        "execstat=warn"
    };
    // A second initialization in the same process keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(cli: &Cli) -> anyhow::Result<ExecstatConfig> {
    match &cli.config {
        Some(path) => ExecstatConfig::load(path)
            .with_context(|| format!("failed to load configuration {}", path.display())),
        None => Ok(ExecstatConfig::discover().unwrap_or_default()),
    }
}

fn summarize(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    let settings = RunSettings::resolve(cli, &config)?;

    // Configure Rayon thread pool for multi-file runs
    if settings.threads > 0 {
        ThreadPoolBuilder::new()
            .num_threads(settings.threads)
            .build_global()
            .ok();
    }

    let filter = cli
        .filter
        .as_deref()
        .map(Regex::new)
        .transpose()
        .context("invalid --filter pattern")?;

    let plan = build_plan(&cli.paths, filter.as_ref())?;
    tracing::debug!(
        files = plan.files.len(),
        key = %settings.extract.times_key,
        pairs = %settings.extract.pairs,
        "summarizing"
    );

    let report = summarize_files(&plan.files, &settings.extract)?;
    let output = render(&report, &settings)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, output.as_bytes())
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Extract, summarize and assemble the report for a set of files
pub fn summarize_files(files: &[PathBuf], options: &ExtractOptions) -> anyhow::Result<Report> {
    let results = extract_all(files, options)?;
    let stats = compute_statistics(&results)?;
    Ok(build_report(&results, &stats, options))
}

/// Render a report in the selected output format
pub fn render(report: &Report, settings: &RunSettings) -> anyhow::Result<String> {
    Ok(match settings.format {
        OutputFormat::Human => format_human_output(report, settings.precision),
        OutputFormat::Json => generate_json_report(report)?,
        OutputFormat::Csv => generate_csv_report(report, settings.precision),
    })
}

fn write_default_config(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        bail!("{} already exists; not overwriting", path.display());
    }
    std::fs::write(path, ExecstatConfig::default_toml())
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}
