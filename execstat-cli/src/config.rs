//! Configuration loading from execstat.toml
//!
//! execstat configuration can be specified in an `execstat.toml` file. The file is
//! discovered by walking up from the current directory, or passed with `--config`.
//! Command-line flags always win over file values.

use execstat_input::{DEFAULT_SCALE, DEFAULT_TIMES_KEY, ExtractOptions, PairMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up during discovery
pub const CONFIG_FILE_NAME: &str = "execstat.toml";

/// execstat configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExecstatConfig {
    /// How timing values are read from result files
    #[serde(default)]
    pub input: InputConfig,
    /// How results are rendered
    #[serde(default)]
    pub output: OutputConfig,
    /// Parallelism settings
    #[serde(default)]
    pub runner: RunnerConfig,
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Entry key holding the timestamp series
    #[serde(default = "default_times_key")]
    pub times_key: String,
    /// Pairing of timestamps: "first" or "all"
    #[serde(default)]
    pub pairs: PairMode,
    /// Multiplier applied to each raw difference (1000 = seconds to ms)
    #[serde(default = "default_scale")]
    pub scale: f64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            times_key: default_times_key(),
            pairs: PairMode::default(),
            scale: default_scale(),
        }
    }
}

fn default_times_key() -> String {
    DEFAULT_TIMES_KEY.to_string()
}
fn default_scale() -> f64 {
    DEFAULT_SCALE
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "human", "json", "csv"
    #[serde(default = "default_format")]
    pub format: String,
    /// Decimal places for human and CSV output
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            precision: default_precision(),
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}
fn default_precision() -> usize {
    2
}

/// Runner configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Threads used when summarizing several files (0 = all cores)
    #[serde(default)]
    pub threads: usize,
}

impl ExecstatConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Locate `execstat.toml` by walking up from the current directory
    pub fn find() -> Option<PathBuf> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    /// Try to discover and load configuration.
    ///
    /// A discovered file that fails to parse is logged and ignored.
    pub fn discover() -> Option<Self> {
        let path = Self::find()?;
        match Self::load(&path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded configuration");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable configuration");
                None
            }
        }
    }

    /// Extraction options described by the `[input]` section
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            times_key: self.input.times_key.clone(),
            pairs: self.input.pairs,
            scale: self.input.scale,
        }
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# execstat configuration

[input]
# Entry key holding the [start, end, ...] timestamps
times_key = "execute_times"
# "first": one duration per entry from its first two timestamps
# "all": one duration per consecutive (start, end) pair
pairs = "first"
# Multiplier applied to each end - start difference (seconds -> ms)
scale = 1000.0

[output]
# Default output format: human, json, csv
format = "human"
# Decimal places for human and csv output
precision = 2

[runner]
# Threads used when summarizing several files (0 = all cores)
threads = 0
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExecstatConfig::default();
        assert_eq!(config.input.times_key, "execute_times");
        assert_eq!(config.input.pairs, PairMode::First);
        assert!((config.input.scale - 1000.0).abs() < f64::EPSILON);
        assert_eq!(config.output.format, "human");
        assert_eq!(config.output.precision, 2);
        assert_eq!(config.runner.threads, 0);
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            [input]
            times_key = "kernel_times"
            pairs = "all"

            [output]
            precision = 3
        "#;

        let config: ExecstatConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.input.times_key, "kernel_times");
        assert_eq!(config.input.pairs, PairMode::All);
        assert_eq!(config.output.precision, 3);
        // Defaults should still apply
        assert!((config.input.scale - 1000.0).abs() < f64::EPSILON);
        assert_eq!(config.output.format, "human");
    }

    #[test]
    fn test_invalid_pair_mode_rejected() {
        let result: Result<ExecstatConfig, _> = toml::from_str("[input]\npairs = \"every\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_default_toml_parses() {
        let config: ExecstatConfig = toml::from_str(&ExecstatConfig::default_toml()).unwrap();
        let defaults = ExecstatConfig::default();

        assert_eq!(config.input.times_key, defaults.input.times_key);
        assert_eq!(config.input.pairs, defaults.input.pairs);
        assert_eq!(config.input.scale, defaults.input.scale);
        assert_eq!(config.output.format, defaults.output.format);
        assert_eq!(config.output.precision, defaults.output.precision);
        assert_eq!(config.runner.threads, defaults.runner.threads);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[input]\nscale = 1.0\n").unwrap();

        let config = ExecstatConfig::load(&path).unwrap();
        assert_eq!(config.extract_options().scale, 1.0);
        assert_eq!(config.extract_options().times_key, "execute_times");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(ExecstatConfig::load(dir.path().join("nope.toml")).is_err());
    }
}
