#![warn(missing_docs)]
//! execstat Report - Output Formats
//!
//! Holds the report model shared by all writers and generates:
//! - JSON (machine-readable, stable across runs)
//! - CSV (spreadsheet-compatible, one row per input file)
//!
//! Human-readable text is produced by the CLI.

mod csv;
mod json;
mod report;

pub use csv::generate_csv_report;
pub use json::generate_json_report;
pub use report::{DurationMetrics, FileResult, Report, ReportMeta, ReportSummary};

/// Report schema version written into JSON output
pub const SCHEMA_VERSION: u32 = 1;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `max:` / `avg:` / `min:` lines
    #[default]
    Human,
    /// JSON with full schema
    Json,
    /// CSV for spreadsheets
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
