//! Error types for project and export operations.

use std::path::PathBuf;
use thiserror::Error;

use crate::image_info::ImageInfoError;

/// Errors that can occur while reading or writing project and HTML files.
#[derive(Error, Debug)]
pub enum FormatError {
    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Document is valid JSON but not a project
    #[error("Invalid format: {message}")]
    InvalidFormat {
        /// Description of the format error
        message: String,
    },

    /// Image file not found at expected path
    #[error("Image not found: {path:?}")]
    ImageNotFound {
        /// Path where the image was expected
        path: PathBuf,
    },

    /// Image exists but its dimensions could not be read
    #[error("Image error: {0}")]
    Image(#[from] ImageInfoError),

    /// Export requested without an image or without hotspots
    #[error("Nothing to export: load an image and draw at least one hotspot")]
    NothingToExport,
}

impl FormatError {
    /// Create an invalid format error with a message.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Create an image-not-found error.
    pub fn image_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ImageNotFound { path: path.into() }
    }
}
