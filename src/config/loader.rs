//! Configuration loading functionality
//!
//! This module contains functions for finding, loading and validating configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use log::{debug, info};
use serde_yaml::from_str;
use shellexpand::tilde;

use crate::utils::find_project_folder;

use super::model::Config;

/// Loads a configuration from a file
///
/// # Arguments
/// * `file` - Path to the configuration file
///
/// # Returns
/// * `Result<Config>` - The loaded configuration or an error
///
/// # Errors
/// Returns an error if the file cannot be read or if the configuration is invalid
pub fn load_config(file: &Path) -> Result<Config> {
    let file_content = fs::read(file).map_err(|e| {
        anyhow!(
            "Failed to read configuration file {}: {}",
            file.display(),
            e
        )
    })?;

    let content_str = String::from_utf8(file_content).map_err(|e| {
        anyhow!(
            "Configuration file {} contains invalid UTF-8 characters: {}",
            file.display(),
            e
        )
    })?;

    let config = parse_config(&content_str).map_err(|e| {
        anyhow!(
            "Failed to parse configuration file {}: {}\nPlease check the YAML syntax.",
            file.display(),
            e
        )
    })?;

    info!("Loaded configuration from {}", file.display());
    Ok(config)
}

/// Parses and validates configuration from a YAML string
///
/// An empty document yields the default configuration.
///
/// # Errors
/// Returns an error if the YAML is invalid or fails validation
pub fn parse_config(content: &str) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Finds the configuration file to use
///
/// The path is expanded first. If nothing exists there and the path is
/// relative, the per-user configuration directory is tried.
///
/// # Returns
/// * `Option<PathBuf>` - The existing configuration file, if any
pub fn locate_config(config: &str) -> Option<PathBuf> {
    let path = PathBuf::from(expand_path(config));
    if path.exists() {
        return Some(path);
    }

    if path.is_relative() {
        if let Ok(folder) = find_project_folder() {
            let candidate = folder.config_dir().join(&path);
            debug!("Looking for configuration in {}", candidate.display());
            if candidate.exists() {
                return Some(candidate);
            }
        }
    }

    None
}

/// Expands `~` and environment variables in a path
///
/// Unknown variables are left as written.
pub fn expand_path(path: &str) -> String {
    shellexpand::full(path)
        .map(|expanded| expanded.into_owned())
        .unwrap_or_else(|_| tilde(path).into_owned())
}
