//! Error types for sloclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while counting lines
#[derive(Error, Debug)]
pub enum SlocError {
    /// A language name given explicitly (e.g. `-t`) is not in the table
    #[error("'{0}' is not a known language!")]
    UnknownLanguage(String),

    /// Failed to open or read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
