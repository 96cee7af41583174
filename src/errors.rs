//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes the failures that
//! can abort a run: listing the target directory, reading or writing a single
//! file, invalid configuration, and writing the report itself.

use std::path::Path;
use thiserror::Error;

/// Application-specific errors used throughout `daofix`.
///
/// Every variant is fatal: the first error ends the run. Files rewritten
/// before the error stay rewritten.
#[derive(Error, Debug)]
pub enum Error {
    /// The target directory is missing or cannot be listed.
    #[error("Cannot access directory '{path}': {source}")]
    DirectoryAccess {
        /// The directory that could not be listed.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Reading or writing one source file failed.
    #[error("I/O error accessing file '{path}': {source}")]
    FileIo {
        /// The file that caused the error.
        path: String, // Use String to avoid lifetime issues if PathBuf is dropped
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration values, caught before any file is listed.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Writing the report lines failed.
    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

/// Result alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an `Error::FileIo` with path context.
pub fn io_error_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Error {
    Error::FileIo {
        path: path.as_ref().display().to_string(),
        source,
    }
}

/// Helper function to create an `Error::DirectoryAccess` with path context.
pub fn dir_error_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Error {
    Error::DirectoryAccess {
        path: path.as_ref().display().to_string(),
        source,
    }
}
