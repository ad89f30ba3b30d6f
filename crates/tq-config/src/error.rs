//! Error types for tq configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use toml::{de, ser};

/// Errors that can occur when loading or processing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: de::Error,
    },

    /// A setting parsed but holds an unusable value.
    #[error("invalid value for {key} in {path}: {message}")]
    InvalidValue {
        /// Path to the file that set the value.
        path: PathBuf,
        /// Dotted key of the setting, e.g. `prompt.quit`.
        key: &'static str,
        /// What is wrong with the value.
        message: String,
    },

    /// Failed to serialize effective settings.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] ser::Error),
}
