//! Duration Extraction
//!
//! Loads each planned file and collects its durations. Files are independent,
//! so several inputs are processed in parallel with Rayon; output order
//! always follows the plan.

use anyhow::Context;
use execstat_input::{ExtractOptions, TimingDocument, extract_durations};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Durations and descriptive fields extracted from one file
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Source file
    pub path: PathBuf,
    /// Document `name`
    pub name: Option<String>,
    /// Document `scenario_name`
    pub scenario: Option<String>,
    /// Document `label` as text
    pub label: Option<String>,
    /// Scaled durations in entry order
    pub durations: Vec<f64>,
    /// Entries without a timing value
    pub skipped_entries: usize,
}

/// Extract durations from a single file
pub fn extract_file(path: &Path, options: &ExtractOptions) -> anyhow::Result<ExtractionResult> {
    let doc = TimingDocument::from_path(path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    let extraction = extract_durations(&doc, options)
        .with_context(|| format!("failed to extract durations from {}", path.display()))?;

    if extraction.skipped > 0 {
        tracing::debug!(
            path = %path.display(),
            skipped_entries = extraction.skipped,
            "entries without '{}' skipped",
            options.times_key
        );
    }

    Ok(ExtractionResult {
        path: path.to_path_buf(),
        label: doc.label_text(),
        name: doc.name,
        scenario: doc.scenario_name,
        durations: extraction.durations,
        skipped_entries: extraction.skipped,
    })
}

/// Extract every planned file, failing on the first error in plan order
pub fn extract_all(
    files: &[PathBuf],
    options: &ExtractOptions,
) -> anyhow::Result<Vec<ExtractionResult>> {
    if files.len() == 1 {
        return Ok(vec![extract_file(&files[0], options)?]);
    }

    files
        .par_iter()
        .map(|path| extract_file(path, options))
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}
