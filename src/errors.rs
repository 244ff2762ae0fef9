//! Error types for roll verification and service configuration.

use thiserror::Error;

/// Reasons a roll record is rejected before any hashing happens.
///
/// These carry the precise diagnostic for logs; the externally surfaced
/// state is always the generic invalid-input verdict.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VerifyError {
    #[error("Missing or empty field: {0}")]
    MissingField(&'static str),

    #[error("Field {field} must be a non-negative integer, got {value:?}")]
    NonNumericField { field: &'static str, value: String },
}

/// Configuration loading and validation errors. Fatal at startup only.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}
