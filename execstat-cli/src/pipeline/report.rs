//! Report Building
//!
//! Pairs extraction results with their statistics and stamps the settings
//! used, so every output format renders from the same `Report`.

use super::extraction::ExtractionResult;
use execstat_input::ExtractOptions;
use execstat_report::{
    DurationMetrics, FileResult, Report, ReportMeta, ReportSummary, SCHEMA_VERSION,
};
use execstat_stats::SummaryStatistics;

/// Build a complete Report
///
/// # Arguments
/// * `results` - Extraction results in plan order
/// * `stats` - Statistics for each result, same order
/// * `options` - Extraction settings recorded in the metadata
pub fn build_report(
    results: &[ExtractionResult],
    stats: &[SummaryStatistics],
    options: &ExtractOptions,
) -> Report {
    let results: Vec<FileResult> = results
        .iter()
        .zip(stats)
        .map(|(r, s)| FileResult {
            path: r.path.display().to_string(),
            name: r.name.clone(),
            scenario: r.scenario.clone(),
            label: r.label.clone(),
            skipped_entries: r.skipped_entries,
            metrics: DurationMetrics::from(s),
        })
        .collect();

    Report {
        meta: ReportMeta {
            schema_version: SCHEMA_VERSION,
            version: env!("CARGO_PKG_VERSION").to_string(),
            times_key: options.times_key.clone(),
            pairs: options.pairs.to_string(),
            scale: options.scale,
        },
        summary: ReportSummary::from_results(&results),
        results,
    }
}
