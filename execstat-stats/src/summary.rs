//! Summary Statistics
//!
//! Reduces a duration series to its extremes, mean and spread. Every sample
//! counts; nothing is trimmed as an outlier.

use crate::percentiles::percentile_of_sorted;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from statistical reduction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// No samples to reduce; mean would be a division by zero
    #[error("no durations to summarize (empty sample set)")]
    EmptySample,
}

/// Summary of one duration series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Number of samples
    pub count: usize,
    /// Largest sample
    pub max: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Smallest sample
    pub min: f64,
    /// 50th percentile
    pub median: f64,
    /// Sample standard deviation (n - 1); zero for a single sample
    pub std_dev: f64,
    /// 90th percentile
    pub p90: f64,
    /// 99th percentile
    pub p99: f64,
}

/// Summarize a series of durations.
///
/// Fails on an empty series instead of producing NaN or zeros.
pub fn compute_summary(samples: &[f64]) -> Result<SummaryStatistics, StatsError> {
    if samples.is_empty() {
        return Err(StatsError::EmptySample);
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    let min = sorted[0];
    let max = sorted[count - 1];

    // Summation rounding can push the mean just past an extreme
    let mean = (samples.iter().sum::<f64>() / count as f64).clamp(min, max);

    let std_dev = if count < 2 {
        0.0
    } else {
        let variance =
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
        variance.sqrt()
    };

    Ok(SummaryStatistics {
        count,
        max,
        mean,
        min,
        median: percentile_of_sorted(&sorted, 50.0),
        std_dev,
        p90: percentile_of_sorted(&sorted, 90.0),
        p99: percentile_of_sorted(&sorted, 99.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_summary() {
        let summary = compute_summary(&[500.0, 200.0]).unwrap();

        assert_eq!(summary.count, 2);
        assert!((summary.max - 500.0).abs() < 1e-9);
        assert!((summary.mean - 350.0).abs() < 1e-9);
        assert!((summary.min - 200.0).abs() < 1e-9);
        assert!((summary.median - 350.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_sample() {
        let summary = compute_summary(&[1.0]).unwrap();

        assert_eq!(summary.count, 1);
        assert_eq!(summary.max, 1.0);
        assert_eq!(summary.mean, 1.0);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.std_dev, 0.0);
    }

    #[test]
    fn test_empty_is_error() {
        assert_eq!(compute_summary(&[]), Err(StatsError::EmptySample));
    }

    #[test]
    fn test_ordering_invariant() {
        let series: [&[f64]; 4] = [
            &[0.1, 0.1, 0.1],
            &[1e-9, 1e9, 3.0],
            &[-5.0, 2.5, 0.0, 7.25],
            &[0.30000000000000004, 0.1, 0.2],
        ];
        for samples in series {
            let s = compute_summary(samples).unwrap();
            assert!(s.min <= s.mean && s.mean <= s.max, "{:?}", s);
            assert!(s.min <= s.median && s.median <= s.max);
        }
    }

    #[test]
    fn test_constant_series() {
        let summary = compute_summary(&[100.0; 5]).unwrap();
        assert_eq!(summary.mean, 100.0);
        assert_eq!(summary.std_dev, 0.0);
    }

    #[test]
    fn test_std_dev() {
        let summary = compute_summary(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        // sample variance = 32 / 7
        assert!((summary.std_dev - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_negative_durations_kept() {
        let summary = compute_summary(&[-10.0, 10.0]).unwrap();
        assert_eq!(summary.min, -10.0);
        assert_eq!(summary.mean, 0.0);
    }
}
