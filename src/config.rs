//! Configuration loading
//!
//! Settings come from two TOML layers, applied in order:
//!
//! 1. `~/.depwarden/config.toml` (user defaults)
//! 2. `<project>/.depwarden.toml` (project overrides)
//!
//! A later layer replaces individual fields of an earlier one, except
//! `practices.disabled`, which is the union of every layer. Missing files
//! are skipped.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adapters::process::DEFAULT_TIMEOUT;
use crate::core::models::Language;
use crate::paths;

/// Configuration loading failures
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Offending file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema
    #[error("invalid configuration in {}: {source}", .path.display())]
    Parse {
        /// Offending file
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: toml::de::Error,
    },
}

/// Merged depwarden configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Audit execution settings
    #[serde(default)]
    pub audit: AuditConfig,
    /// Project description overrides
    #[serde(default)]
    pub project: ProjectConfig,
    /// Practice selection
    #[serde(default)]
    pub practices: PracticesConfig,
}

/// Audit execution settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Seconds before a running audit is killed; `0` waits forever
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Project description overrides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Source language, skipping detection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

/// Practice selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticesConfig {
    /// Practice ids that are never evaluated
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disabled: Vec<String>,
}

impl Config {
    /// Load the global layer, then the project layer under `root`
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or parsed.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        Self::load_layers(&[paths::global_config(), paths::project_config(root)])
    }

    /// Load and merge the given files in order
    ///
    /// # Errors
    ///
    /// Returns an error if a file exists but cannot be read or parsed.
    pub fn load_layers(layers: &[PathBuf]) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        for path in layers {
            if let Some(layer) = Self::read(path)? {
                log::debug!("loaded configuration from {}", path.display());
                config.merge(layer);
            }
        }
        Ok(config)
    }

    fn read(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.is_file() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map(Some).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Overlay `other` on top of `self`
    ///
    /// Scalar fields set in `other` win; disabled practice ids are unioned.
    pub fn merge(&mut self, other: Self) {
        if other.audit.timeout_secs.is_some() {
            self.audit.timeout_secs = other.audit.timeout_secs;
        }
        if other.project.language.is_some() {
            self.project.language = other.project.language;
        }
        for id in other.practices.disabled {
            if !self.practices.disabled.contains(&id) {
                self.practices.disabled.push(id);
            }
        }
    }

    /// Effective audit timeout (`None` = unbounded)
    #[must_use]
    pub fn audit_timeout(&self) -> Option<Duration> {
        match self.audit.timeout_secs {
            None => Some(DEFAULT_TIMEOUT),
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
        }
    }

    /// Disabled practice ids as a set
    #[must_use]
    pub fn disabled_practices(&self) -> HashSet<String> {
        self.practices.disabled.iter().cloned().collect()
    }
}
