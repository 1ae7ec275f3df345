//! Configuration data structures
//!
//! This module contains the data structures for configuration.

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::constants::ROOT_PATH;
use crate::naming::{ConverterOptions, PathIdentifierConverter};

/// Configuration for identifier generation
///
/// A minimal file only names the root:
///
/// ```yaml
/// namespace_root: /sitecore/templates
/// root_match: prefix
/// on_prefix_miss: reject
/// segments: per_segment
/// uppercase_locale: invariant
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct Config {
    /// Path prefix stripped from every content path
    #[serde(default)]
    pub namespace_root: Option<String>,
    /// Conversion behavior, every key optional
    #[serde(flatten)]
    pub options: ConverterOptions,
}

impl Config {
    /// Validates the configuration
    ///
    /// # Errors
    /// Returns an error with a detailed message if the namespace root is `/`
    pub fn validate(&self) -> Result<()> {
        if let Some(root) = &self.namespace_root {
            if root == ROOT_PATH {
                return Err(anyhow!(
                    "Namespace root cannot be {ROOT_PATH}, please use a sub-path e.g. /sitecore/templates"
                ));
            }
        }

        Ok(())
    }

    /// Replaces the configured root when a command-line root is given
    pub fn with_root_override(mut self, root: Option<&str>) -> Self {
        if let Some(root) = root {
            self.namespace_root = Some(root.to_string());
        }
        self
    }

    /// Builds a converter from this configuration
    ///
    /// # Errors
    /// Returns an error if no namespace root is configured or the root is invalid
    pub fn converter(&self) -> Result<PathIdentifierConverter> {
        let root = self.namespace_root.as_deref().ok_or_else(|| {
            anyhow!("No namespace root configured. Pass --root or set namespace_root in the config file.")
        })?;

        Ok(PathIdentifierConverter::with_options(root, self.options)?)
    }
}
