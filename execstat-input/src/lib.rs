#![warn(missing_docs)]
//! execstat Input Model
//!
//! Decodes timing result documents and turns their timestamp series into
//! elapsed durations.
//!
//! A result document looks like:
//!
//! ```text
//! { "times": [ { "execute_times": [start, end, ...] | null, ... }, ... ] }
//! ```
//!
//! Entries without the timing key (or with `null`) are skipped. Everything
//! else must be a sequence of at least two numbers, and every scaled
//! duration must be finite.

mod document;
mod extract;

pub use document::{InputError, TimingDocument, TimingEntry};
pub use extract::{ExtractOptions, Extraction, PairMode, extract_durations};

/// Timing key read from each entry when none is configured
pub const DEFAULT_TIMES_KEY: &str = "execute_times";

/// Seconds to milliseconds
pub const DEFAULT_SCALE: f64 = 1000.0;
