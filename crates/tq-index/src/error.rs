//! Error types for the tq-index crate.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while building an index.
///
/// A failed build never yields a partially populated index.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Failed to open or read an input file.
    #[error("failed to read {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// I/O error while reading from a stream.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
