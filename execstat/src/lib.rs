#![warn(missing_docs)]
//! # execstat
//!
//! Execution-time statistics for timing result files.
//!
//! Each result file holds a `times` array whose entries carry an
//! `execute_times` series of `[start, end]` timestamps in seconds. execstat
//! turns every entry into a duration in milliseconds and reports the maximum,
//! average and minimum:
//!
//! ```text
//! $ execstat run.json
//! max: 500.00
//! avg: 350.00
//! min: 200.00
//! ```
//!
//! ## Library Use
//!
//! ```ignore
//! use execstat::prelude::*;
//!
//! let doc = TimingDocument::from_path("run.json")?;
//! let extraction = extract_durations(&doc, &ExtractOptions::default())?;
//! let summary = compute_summary(&extraction.durations)?;
//! println!("avg: {:.2}", summary.mean);
//! ```

pub use execstat_cli::{Cli, ExecstatConfig, RunSettings, render, run, run_with_cli, summarize_files};
pub use execstat_input::{
    DEFAULT_SCALE, DEFAULT_TIMES_KEY, ExtractOptions, Extraction, InputError, PairMode,
    TimingDocument, TimingEntry, extract_durations,
};
pub use execstat_report::{
    DurationMetrics, FileResult, OutputFormat, Report, generate_csv_report, generate_json_report,
};
pub use execstat_stats::{StatsError, SummaryStatistics, compute_percentile, compute_summary};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        ExtractOptions, Extraction, PairMode, StatsError, SummaryStatistics, TimingDocument,
        compute_summary, extract_durations,
    };
}
