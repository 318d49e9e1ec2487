// src/error.rs

//! Crate-level error type
//!
//! The transforms themselves never fail. Errors only come from parsing a
//! stylesheet for tree mode or from loading configuration.

use thiserror::Error;

use crate::config::ConfigError;
use crate::stylesheet::ParseError;

/// Errors surfaced by the hostcss library
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to parse stylesheet: {0}")]
    Parse(#[from] ParseError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for hostcss operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_errors_convert() {
        let parse: Error = crate::stylesheet::parse("a {").unwrap_err().into();
        assert!(matches!(parse, Error::Parse(ParseError::UnclosedBlock { .. })));
        assert!(parse.to_string().starts_with("Failed to parse stylesheet"));

        let config: Error = Config::from_toml_str("mode = 1").unwrap_err().into();
        assert!(matches!(config, Error::Config(ConfigError::ParseError(_))));
    }
}
