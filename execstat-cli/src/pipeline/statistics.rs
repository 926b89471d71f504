//! Statistics Computation
//!
//! Per-file summary statistics, computed in parallel with Rayon.

use super::extraction::ExtractionResult;
use anyhow::Context;
use execstat_stats::{SummaryStatistics, compute_summary};
use rayon::prelude::*;

/// Summarize every extraction result, in the same order.
///
/// A file that produced no durations (empty `times`, or every entry null)
/// is an error.
pub fn compute_statistics(results: &[ExtractionResult]) -> anyhow::Result<Vec<SummaryStatistics>> {
    results
        .par_iter()
        .map(|r| {
            compute_summary(&r.durations)
                .with_context(|| format!("cannot summarize {}", r.path.display()))
        })
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}
