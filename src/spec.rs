//! Desired-state spec files
//!
//! A spec file lists the jobs and packages a host should run and the
//! maximum log file size for its account. JSON and TOML are both
//! accepted, keyed off the file extension.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use applier::{ApplySpec, Job, Package};

/// Errors that can occur while loading a desired-state spec.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Spec file does not exist
    #[error("spec file not found: {0}")]
    NotFound(PathBuf),

    /// File extension is neither `.json` nor `.toml`
    #[error("unsupported spec format: {0} (expected .json or .toml)")]
    UnsupportedFormat(PathBuf),

    /// Invalid JSON spec content
    #[error("invalid JSON spec: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid TOML spec content
    #[error("invalid TOML spec: {0}")]
    Toml(#[from] toml::de::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A parsed desired-state spec.
#[derive(Debug, Clone, Deserialize)]
pub struct DesiredState {
    #[serde(default)]
    jobs: Vec<Job>,

    #[serde(default)]
    packages: Vec<Package>,

    /// Logrotate `size` directive literal
    #[serde(default = "default_max_log_file_size")]
    max_log_file_size: String,
}

fn default_max_log_file_size() -> String {
    "50M".to_string()
}

impl DesiredState {
    /// Load a spec from a `.json` or `.toml` file.
    pub fn load(path: &Path) -> Result<Self, SpecError> {
        if !path.exists() {
            return Err(SpecError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(serde_json::from_str(&content)?),
            Some("toml") => Ok(toml::from_str(&content)?),
            _ => Err(SpecError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

impl ApplySpec for DesiredState {
    fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    fn packages(&self) -> &[Package] {
        &self.packages
    }

    fn max_log_file_size(&self) -> &str {
        &self.max_log_file_size
    }
}
