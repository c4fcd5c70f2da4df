//! # CLI Configuration
//!
//! Optional YAML settings for the `comply` binary.
//!
//! ```yaml
//! dataDir: ./data
//! coverage:
//!   jurisdictions: [EU, FR, DE, UK, KSA]
//! ```
//!
//! Resolution: an explicit `--config <path>` must exist and parse. Without
//! it, `comply.yaml` in the working directory is used when present.
//! Otherwise the built-in defaults apply. Unknown keys are rejected so a
//! typo does not silently fall back to a default.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, warn};

use comply_coverage::DEFAULT_JURISDICTIONS;

/// File name looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "comply.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct Config {
    /// Framework directory used when a command's `--dir` is not given.
    pub data_dir: PathBuf,
    pub coverage: CoverageConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct CoverageConfig {
    /// Jurisdictions of interest, in report order.
    pub jurisdictions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            coverage: CoverageConfig::default(),
        }
    }
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            jurisdictions: DEFAULT_JURISDICTIONS.iter().map(|j| j.to_string()).collect(),
        }
    }
}

impl Config {
    /// Parse a YAML configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        // An empty file is a valid, all-defaults configuration.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("invalid config file: {}", path.display()))?;
        if config.coverage.jurisdictions.is_empty() {
            warn!(path = %path.display(), "coverage.jurisdictions is empty; coverage reports will be empty");
        }
        Ok(config)
    }

    /// Resolve the configuration for a run started in `cwd`.
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config");
            return Self::from_file(path);
        }
        let discovered = cwd.join(DEFAULT_CONFIG_FILE);
        if discovered.is_file() {
            debug!(path = %discovered.display(), "loading discovered config");
            return Self::from_file(&discovered);
        }
        Ok(Self::default())
    }

    /// The framework directory: the command's `--dir` if given, else `dataDir`.
    pub fn data_dir_or<'a>(&'a self, dir: Option<&'a Path>) -> &'a Path {
        dir.unwrap_or(&self.data_dir)
    }
}
