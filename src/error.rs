//! Error types for Ridgepole operations.
//!
//! This module defines [`RidgepoleError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `RidgepoleError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `RidgepoleError::Other`) for unexpected errors
//! - No error is retried automatically; every component returns its failure
//!   to its direct caller, and only the CLI boundary decides the process exit

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Ridgepole operations.
#[derive(Debug, Error)]
pub enum RidgepoleError {
    /// Template identifier is not of the `<owner>/<repo>` form.
    #[error("Invalid template identifier '{input}': expected <owner>/<repo>")]
    InvalidIdentifier { input: String },

    /// Transport-level failure while downloading an archive.
    #[error("Failed to download {url}: {source}")]
    Network {
        url: String,
        source: reqwest::Error,
    },

    /// The archive endpoint answered with a non-200 status.
    #[error("Bad server response for {url}: {status}")]
    BadStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The downloaded archive cannot be parsed as a zip container.
    #[error("Failed to read archive {path}: {source}")]
    CorruptArchive {
        path: PathBuf,
        source: zip::result::ZipError,
    },

    /// The archive does not follow the single top-level wrapper convention.
    #[error("Unexpected archive layout: {reason}")]
    UnexpectedLayout { reason: String },

    /// An archive member would resolve outside the destination directory.
    #[error("Archive member '{entry}' escapes the destination directory")]
    PathEscape { entry: String },

    /// A cached template could not be removed.
    #[error("Failed to remove cached template '{id}': {source}")]
    CleanFailed { id: String, source: std::io::Error },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Ridgepole operations.
pub type Result<T> = std::result::Result<T, RidgepoleError>;
