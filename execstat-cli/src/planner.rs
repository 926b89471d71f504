//! Input Planner
//!
//! Builds the list of result files to process from command-line paths.
//!
//! - A regular file is taken as given, in command-line order
//! - A directory contributes its `*.json` files, sorted by path
//! - An optional regex keeps only matching paths

use anyhow::bail;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Ordered list of input files
#[derive(Debug, Clone, Default)]
pub struct InputPlan {
    /// Files to process, in output order
    pub files: Vec<PathBuf>,
}

/// Build the input plan.
///
/// Fails on a path that is neither a file nor a directory, and on a plan
/// that ends up empty.
pub fn build_plan(paths: &[PathBuf], filter: Option<&Regex>) -> anyhow::Result<InputPlan> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            files.extend(json_files_in(path)?);
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            bail!(
                "Input path '{}' not found as valid file or directory",
                path.display()
            );
        }
    }

    if let Some(re) = filter {
        files.retain(|f| re.is_match(&f.to_string_lossy()));
    }

    if files.is_empty() {
        bail!("No input files to process");
    }

    tracing::debug!(files = files.len(), "input plan built");
    Ok(InputPlan { files })
}

fn json_files_in(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            found.push(path);
        }
    }
    found.sort();
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, "{}").unwrap();
        path
    }

    #[test]
    fn test_explicit_files_keep_order() {
        let dir = TempDir::new().unwrap();
        let b = touch(dir.path(), "b.json");
        let a = touch(dir.path(), "a.json");

        let plan = build_plan(&[b.clone(), a.clone()], None).unwrap();
        assert_eq!(plan.files, vec![b, a]);
    }

    #[test]
    fn test_directory_expands_sorted_json_only() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "z.json");
        touch(dir.path(), "a.json");
        touch(dir.path(), "notes.txt");
        std::fs::create_dir(dir.path().join("nested.json")).unwrap();

        let plan = build_plan(&[dir.path().to_path_buf()], None).unwrap();
        let names: Vec<_> = plan
            .files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.json", "z.json"]);
    }

    #[test]
    fn test_missing_path_fails() {
        let dir = TempDir::new().unwrap();
        let err = build_plan(&[dir.path().join("absent.json")], None).unwrap_err();
        assert!(err.to_string().contains("not found as valid file or directory"));
    }

    #[test]
    fn test_filter() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "run_mps_7tpcs.json");
        touch(dir.path(), "run_mig_7tpcs.json");

        let re = Regex::new("mps").unwrap();
        let plan = build_plan(&[dir.path().to_path_buf()], Some(&re)).unwrap();
        assert_eq!(plan.files.len(), 1);
        assert!(plan.files[0].to_string_lossy().contains("mps"));
    }

    #[test]
    fn test_empty_plan_fails() {
        let dir = TempDir::new().unwrap();
        assert!(build_plan(&[dir.path().to_path_buf()], None).is_err());
    }
}
