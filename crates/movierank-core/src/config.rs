//! Analyzer configuration for movierank
//!
//! Settings come from built-in defaults, then an optional `config.toml`
//! (explicit path, `$MOVIERANK_CONFIG_DIR/config.toml`, or the platform
//! config directory), then command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::{MovieError, Result};

/// Maximum number of records accepted per run
pub const DEFAULT_MAX_RECORDS: usize = 300;

/// Number of ranked movies shown in the report
pub const DEFAULT_TOP_N: usize = 10;

const CONFIG_DIR: &str = "movierank";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "MOVIERANK_CONFIG_DIR";

/// Settings for the collection builder and report formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Hard cap on accepted records; input past the cap is never read
    #[serde(default = "default_max_records")]
    pub max_records: usize,

    /// How many ranked movies to display
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_max_records() -> usize {
    DEFAULT_MAX_RECORDS
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_records: DEFAULT_MAX_RECORDS,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl AnalyzerConfig {
    /// Default config file location, if one can be determined
    pub fn default_path() -> Option<PathBuf> {
        let dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
            Ok(env_dir) => PathBuf::from(env_dir),
            Err(_) => dirs::config_dir()?.join(CONFIG_DIR),
        };
        Some(dir.join(CONFIG_FILE))
    }

    /// Load configuration from a file that must exist
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MovieError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                MovieError::io_operation("read config", path.display(), e)
            }
        })?;
        let config: AnalyzerConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve configuration: an explicit path must exist, the default
    /// location falls back to built-in defaults when absent.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides on top of file values
    pub fn with_overrides(mut self, max_records: Option<usize>, top_n: Option<usize>) -> Result<Self> {
        if let Some(max) = max_records {
            self.max_records = max;
        }
        if let Some(top) = top_n {
            self.top_n = top;
        }
        self.validate()?;
        Ok(self)
    }

    /// Reject settings that would make the report meaningless
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            bail_invalid!("top_n", "0 (must be at least 1)");
        }
        if self.max_records == 0 {
            bail_invalid!("max_records", "0 (must be at least 1)");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.max_records, 300);
        assert_eq!(config.top_n, 10);
    }

    #[test]
    fn test_load_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "top_n = 5\n").unwrap();

        let config = AnalyzerConfig::load(&path).unwrap();
        assert_eq!(config.top_n, 5);
        assert_eq!(config.max_records, DEFAULT_MAX_RECORDS);
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempdir().unwrap();
        let err = AnalyzerConfig::resolve(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, MovieError::FileNotFound { .. }));
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "top_n = \"ten\"\n").unwrap();

        let err = AnalyzerConfig::load(&path).unwrap_err();
        assert!(matches!(err, MovieError::Toml(_)));
    }

    #[test]
    fn test_overrides_win() {
        let config = AnalyzerConfig::default()
            .with_overrides(Some(50), Some(3))
            .unwrap();
        assert_eq!(config.max_records, 50);
        assert_eq!(config.top_n, 3);
    }

    #[test]
    fn test_zero_top_is_invalid() {
        let err = AnalyzerConfig::default()
            .with_overrides(None, Some(0))
            .unwrap_err();
        assert!(matches!(err, MovieError::InvalidValue { .. }));
    }

    #[test]
    fn test_serialize_roundtrip_shape() {
        let text = toml::to_string(&AnalyzerConfig::default()).unwrap();
        assert!(text.contains("max_records = 300"));
        assert!(text.contains("top_n = 10"));
    }
}
