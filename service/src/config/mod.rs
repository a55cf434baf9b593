//! Configuration loading for the course importer
//!
//! This module provides configuration loading from YAML files with
//! environment variable substitution support. Every section has defaults, so
//! an empty file (or no file at all) yields a working configuration.

use regex::{Captures, Regex};
use scalar_core::error::{CourseError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}:]+)(?::(-)?([^}]*))?\}").expect("hardcoded env var pattern is valid")
});

/// Load configuration from `YAML` file with environment variable substitution
///
/// # Errors
///
/// Returns `CourseError::IoError` if the file cannot be read
/// Returns `CourseError::ConfigError` if the YAML cannot be parsed
pub fn load_config<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)?;
    let substituted = substitute_env_vars(&contents);

    serde_yaml::from_str(&substituted)
        .map_err(|e| CourseError::config(format!("Failed to parse YAML config: {e}")))
}

/// Substitute environment variables in the format ${VAR:-default}
fn substitute_env_vars(content: &str) -> String {
    ENV_VAR
        .replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            let default_value = caps.get(3).map_or("", |m| m.as_str());

            env::var(var_name).unwrap_or_else(|_| default_value.to_string())
        })
        .into_owned()
}

/// Complete importer configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImporterConfig {
    /// Worksheet selection and limits
    pub workbook: WorkbookConfig,
    /// Serialization of the imported course
    pub output: OutputConfig,
}

impl ImporterConfig {
    /// Load and validate configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a value
    /// is out of range.
    pub fn load(path: &Path) -> Result<Self> {
        let config: Self = load_config(path)?;
        config.validate()?;
        debug!("Loaded importer configuration from '{}'", path.display());
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns `CourseError::ConfigError` naming the offending key.
    pub fn validate(&self) -> Result<()> {
        if self.workbook.max_data_rows == Some(0) {
            return Err(CourseError::config(
                "workbook.max_data_rows must be greater than zero",
            ));
        }
        if let Some(name) = &self.workbook.sheet_name
            && name.trim().is_empty()
        {
            return Err(CourseError::config("workbook.sheet_name must not be blank"));
        }
        Ok(())
    }
}

/// Worksheet selection and limits
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkbookConfig {
    /// Worksheet to read; the first worksheet when unset
    pub sheet_name: Option<String>,
    /// Reject sheets with more data rows than this
    pub max_data_rows: Option<usize>,
}

/// Output serialization settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Serialization format
    pub format: OutputFormat,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty: true,
        }
    }
}

/// Serialization format for the course graph
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON document
    #[default]
    Json,
    /// YAML document
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}
