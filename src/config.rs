// src/config.rs

//! Configuration file support
//!
//! Transform settings can be kept in a TOML file next to the stylesheets.
//!
//! # Example hostcss.toml
//!
//! ```toml
//! # Which transformer to use: "text" (default) or "tree"
//! mode = "tree"
//!
//! [transform]
//! host_tag = "&"
//! layer = "defaults"
//! data_attributes = true
//! exclude_from_data = ["part"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::attribute::is_attribute_name;
use crate::options::TransformOptions;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "hostcss.toml";

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid host tag {0:?}: must be non-empty and contain no braces")]
    InvalidHostTag(String),

    #[error("Invalid layer name {0:?}: must not contain braces or semicolons")]
    InvalidLayerName(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Which transformer processes the input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Pattern substitution over raw text
    #[default]
    Text,
    /// Parse, rewrite the rule tree, print back
    Tree,
}

/// Contents of a configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub mode: Mode,
    pub transform: TransformOptions,
}

impl Config {
    /// Load and validate a configuration file
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would produce broken CSS
    pub fn validate(&self) -> ConfigResult<()> {
        validate_options(&self.transform)
    }
}

/// Check a set of transform options for values that would break the output
pub fn validate_options(options: &TransformOptions) -> ConfigResult<()> {
    let host_tag = &options.host_tag;
    if host_tag.is_empty() || host_tag.contains(['{', '}']) {
        return Err(ConfigError::InvalidHostTag(host_tag.clone()));
    }

    if let Some(layer) = &options.layer
        && layer.contains(['{', '}', ';'])
    {
        return Err(ConfigError::InvalidLayerName(layer.clone()));
    }

    for name in options.excluded() {
        if !is_attribute_name(name) {
            warn!("Excluded attribute {:?} never matches an attribute selector", name);
        }
    }

    Ok(())
}
