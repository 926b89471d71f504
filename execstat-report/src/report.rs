//! Report Data Structures

use execstat_stats::SummaryStatistics;
use serde::{Deserialize, Serialize};

/// Complete report over every processed input file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Run settings the report was produced with
    pub meta: ReportMeta,
    /// One entry per input file, in plan order
    pub results: Vec<FileResult>,
    /// Totals across all files
    pub summary: ReportSummary,
}

/// Report metadata.
///
/// No timestamp or host details: identical inputs serialize identically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Report layout version
    pub schema_version: u32,
    /// Version of the tool that wrote the report
    pub version: String,
    /// Entry key the durations were read from
    pub times_key: String,
    /// Pair mode, `first` or `all`
    pub pairs: String,
    /// Multiplier applied to each raw difference
    pub scale: f64,
}

/// Statistics for one input file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileResult {
    /// Input path as given or expanded
    pub path: String,
    /// Document `name`, if present
    pub name: Option<String>,
    /// Document `scenario_name`, if present
    pub scenario: Option<String>,
    /// Document `label` as text, if present
    pub label: Option<String>,
    /// Entries that had no timing value
    pub skipped_entries: usize,
    /// Statistics over the file's durations
    pub metrics: DurationMetrics,
}

/// Duration metrics, in scaled units (milliseconds by default)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationMetrics {
    /// Number of durations
    pub count: usize,
    /// Largest duration
    pub max: f64,
    /// Arithmetic mean
    pub avg: f64,
    /// Smallest duration
    pub min: f64,
    /// 50th percentile
    pub median: f64,
    /// Sample standard deviation
    pub std_dev: f64,
    /// 90th percentile
    pub p90: f64,
    /// 99th percentile
    pub p99: f64,
}

impl From<&SummaryStatistics> for DurationMetrics {
    fn from(stats: &SummaryStatistics) -> Self {
        Self {
            count: stats.count,
            max: stats.max,
            avg: stats.mean,
            min: stats.min,
            median: stats.median,
            std_dev: stats.std_dev,
            p90: stats.p90,
            p99: stats.p99,
        }
    }
}

/// Totals across all files
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Files processed
    pub files: usize,
    /// Durations across all files
    pub total_durations: usize,
    /// Entries without a timing value across all files
    pub skipped_entries: usize,
}

impl ReportSummary {
    /// Tally a set of file results
    pub fn from_results(results: &[FileResult]) -> Self {
        results.iter().fold(Self::default(), |mut acc, r| {
            acc.files += 1;
            acc.total_durations += r.metrics.count;
            acc.skipped_entries += r.skipped_entries;
            acc
        })
    }
}
