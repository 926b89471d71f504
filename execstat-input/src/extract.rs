//! Duration Extraction
//!
//! Converts the timestamp series of each entry into scaled durations.
//!
//! ```text
//! first:  [t0, t1, t2, t3]  ->  (t1 - t0) * scale
//! all:    [t0, t1, t2, t3]  ->  (t1 - t0) * scale, (t3 - t2) * scale
//! ```

use crate::document::{InputError, TimingDocument};
use crate::{DEFAULT_SCALE, DEFAULT_TIMES_KEY};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How timestamps within one entry are paired into durations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairMode {
    /// Only the first two timestamps; any further elements are ignored
    #[default]
    First,
    /// Every consecutive (start, end) pair
    All,
}

impl std::str::FromStr for PairMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" => Ok(PairMode::First),
            "all" => Ok(PairMode::All),
            other => Err(format!("Unknown pair mode: {}", other)),
        }
    }
}

impl std::fmt::Display for PairMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PairMode::First => write!(f, "first"),
            PairMode::All => write!(f, "all"),
        }
    }
}

/// Extraction settings
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    /// Entry key holding the timestamp series
    pub times_key: String,
    /// Pairing of timestamps within an entry
    pub pairs: PairMode,
    /// Multiplier applied to each raw difference
    pub scale: f64,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            times_key: DEFAULT_TIMES_KEY.to_string(),
            pairs: PairMode::default(),
            scale: DEFAULT_SCALE,
        }
    }
}

/// Durations pulled from one document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    /// Scaled durations in entry order
    pub durations: Vec<f64>,
    /// Entries without a timing value
    pub skipped: usize,
}

/// Extract every duration from a document, in entry order.
///
/// Entries without the timing key are skipped and counted. An empty result
/// is returned as-is; deciding that it is an error is up to the caller.
pub fn extract_durations(
    doc: &TimingDocument,
    options: &ExtractOptions,
) -> Result<Extraction, InputError> {
    let mut durations = Vec::with_capacity(doc.times.len());
    let mut skipped = 0usize;

    for (index, entry) in doc.times.iter().enumerate() {
        let Some(value) = entry.timestamps(&options.times_key) else {
            skipped += 1;
            continue;
        };
        let stamps = timestamps(index, value)?;

        match options.pairs {
            PairMode::First => {
                durations.push(scaled(index, stamps[0], stamps[1], options.scale)?);
            }
            PairMode::All => {
                if stamps.len() % 2 != 0 {
                    return Err(InputError::OddLength {
                        index,
                        len: stamps.len(),
                    });
                }
                for pair in stamps.chunks_exact(2) {
                    durations.push(scaled(index, pair[0], pair[1], options.scale)?);
                }
            }
        }
    }

    tracing::debug!(
        key = %options.times_key,
        durations = durations.len(),
        skipped,
        "extracted durations"
    );

    Ok(Extraction { durations, skipped })
}

/// `(end - start) * scale`, rejecting overflow to infinity
fn scaled(index: usize, start: f64, end: f64, scale: f64) -> Result<f64, InputError> {
    let duration = (end - start) * scale;
    if duration.is_finite() {
        Ok(duration)
    } else {
        Err(InputError::NonFinite { index })
    }
}

/// Validate one timing value as a numeric sequence of length >= 2
fn timestamps(index: usize, value: &Value) -> Result<Vec<f64>, InputError> {
    let items = value.as_array().ok_or(InputError::NotASequence {
        index,
        found: json_kind(value),
    })?;

    if items.len() < 2 {
        return Err(InputError::TooFewTimestamps {
            index,
            len: items.len(),
        });
    }

    items
        .iter()
        .enumerate()
        .map(|(position, v)| v.as_f64().ok_or(InputError::NonNumeric { index, position }))
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
