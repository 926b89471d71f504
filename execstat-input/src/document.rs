//! Result Document Model
//!
//! Serde model of a timing result file. Only `times` is required; the
//! descriptive fields are carried through to reports when present.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a document or extracting its durations
#[derive(Debug, Error)]
pub enum InputError {
    /// The file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The content is not a timing document
    #[error("invalid timing document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The timing value is neither an array nor null
    #[error("times[{index}]: expected a sequence of timestamps, found {found}")]
    NotASequence {
        /// Position in `times`
        index: usize,
        /// JSON kind that was found instead
        found: &'static str,
    },

    /// Fewer than two timestamps
    #[error("times[{index}]: expected at least two timestamps, found {len}")]
    TooFewTimestamps {
        /// Position in `times`
        index: usize,
        /// Number of timestamps present
        len: usize,
    },

    /// A timestamp that is not a JSON number
    #[error("times[{index}][{position}]: timestamp is not a number")]
    NonNumeric {
        /// Position in `times`
        index: usize,
        /// Position within the timestamp sequence
        position: usize,
    },

    /// Pair mode `all` over an odd number of timestamps
    #[error("times[{index}]: {len} timestamps cannot be split into start/end pairs")]
    OddLength {
        /// Position in `times`
        index: usize,
        /// Number of timestamps present
        len: usize,
    },

    /// A scaled duration overflowed to infinity
    #[error("times[{index}]: duration is not finite")]
    NonFinite {
        /// Position in `times`
        index: usize,
    },
}

/// A parsed timing result file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingDocument {
    /// Benchmark name
    #[serde(default)]
    pub name: Option<String>,
    /// Scenario the run belongs to
    #[serde(default)]
    pub scenario_name: Option<String>,
    /// Free-form label; result files use both strings and numbers here
    #[serde(default)]
    pub label: Option<Value>,
    /// Recorded timing entries, in file order
    pub times: Vec<TimingEntry>,
}

/// One record of the `times` array.
///
/// The set of timing keys varies between producers, so the record is kept
/// as a raw JSON object and queried by key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimingEntry(Map<String, Value>);

impl TimingDocument {
    /// Parse a document from JSON text
    pub fn from_json(text: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a document from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let doc = Self::from_json(&content)?;
        tracing::debug!(
            path = %path.display(),
            entries = doc.times.len(),
            "parsed timing document"
        );
        Ok(doc)
    }

    /// Label rendered as plain text (strings unquoted, numbers as written)
    pub fn label_text(&self) -> Option<String> {
        match self.label.as_ref()? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl TimingEntry {
    /// Value stored under `key`, or `None` if the key is absent or `null`
    pub fn timestamps(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }
}
