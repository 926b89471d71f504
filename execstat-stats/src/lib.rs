#![warn(missing_docs)]
//! execstat Statistics
//!
//! Summary statistics over execution durations:
//! - Extremes (max, min) and arithmetic mean
//! - Median and tail percentiles (p90, p99)
//! - Sample standard deviation
//!
//! An empty series is an error, never a silent zero.

mod percentiles;
mod summary;

pub use percentiles::compute_percentile;
pub use summary::{StatsError, SummaryStatistics, compute_summary};
