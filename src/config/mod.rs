//! Configuration module
//!
//! This module contains components for loading and validating configuration.

pub mod loader;
mod model;

pub use loader::{expand_path, load_config, locate_config, parse_config};
pub use model::Config;
