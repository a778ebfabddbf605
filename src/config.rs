//! Configuration management for the exercise form analyzer

use crate::exercise::Exercise;
use crate::{Error, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Session defaults
    pub session: SessionConfig,

    /// Output configuration
    pub output: OutputConfig,
}

/// Defaults applied to new tracking sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Exercise used for frames that do not name one
    pub default_exercise: String,
}

/// What the frame stream driver writes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Include per-frame joint angles in each result
    pub include_angles: bool,

    /// Write one summary per session after the last frame
    pub summary: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_exercise: Exercise::Squat.name().to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            include_angles: true,
            summary: false,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::IoError(e.to_string()))?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content).map_err(|e| Error::IoError(e.to_string()))?;

        Ok(())
    }

    /// Load configuration from `path` if given.
    ///
    /// A file that cannot be read or parsed is logged and replaced by the
    /// defaults rather than aborting.
    pub fn load_or_default(path: Option<&str>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        info!("Loading configuration from: {}", path);
        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load config file: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Apply command-line overrides on top of the file values
    pub fn apply_overrides(&mut self, exercise: Option<String>, summary: bool, no_angles: bool) {
        if let Some(exercise) = exercise {
            self.session.default_exercise = exercise;
        }
        if summary {
            self.output.summary = true;
        }
        if no_angles {
            self.output.include_angles = false;
        }
    }

    /// Default exercise as a supported variant
    pub fn default_exercise(&self) -> Result<Exercise> {
        self.session.default_exercise.parse()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.default_exercise().map_err(|_| {
            Error::ConfigError(format!(
                "Default exercise must be one of {}, got '{}'",
                Exercise::ALL.map(Exercise::name).join(", "),
                self.session.default_exercise
            ))
        })?;

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Exercise Form Analyzer Configuration

# Session defaults
session:
  default_exercise: "squat"

# Output settings
output:
  include_angles: true
  summary: false
"#;
