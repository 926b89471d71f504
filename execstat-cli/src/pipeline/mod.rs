//! Extraction Pipeline
//!
//! Turns planned result files into a finished report.
//!
//! ## Pipeline Overview
//!
//! ```text
//! InputPlan (files)
//!       │
//!       ▼
//! ┌─────────────┐
//! │ extraction  │  Parse documents, collect scaled durations (parallel)
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ statistics  │  max / avg / min and friends per file (parallel)
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   report    │  Assemble Report for every output format
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ formatting  │  Human-readable output
//! └─────────────┘
//! ```
//!
//! Any failure aborts the whole run before anything is written.

mod extraction;
mod formatting;
mod report;
mod statistics;

pub use extraction::{ExtractionResult, extract_all, extract_file};
pub use formatting::format_human_output;
pub use report::build_report;
pub use statistics::compute_statistics;
