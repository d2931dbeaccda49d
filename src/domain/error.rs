//! Domain error types

use thiserror::Error;

/// Error when a reference timestamp cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid reference date: \"{input}\". Expected ISO-8601 (e.g., 1994-10-18T12:05:00+01:00 or 1994-10-18)")]
pub struct ReferenceParseError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
