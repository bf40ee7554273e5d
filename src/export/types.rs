//! Data types for image export.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// How an export request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The image was written to the given path
    Saved(PathBuf),
    /// Writing failed; the message is suitable for showing to the user
    Failed(String),
    /// The user dismissed the save dialog
    Cancelled,
}

impl ExportOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, ExportOutcome::Saved(_))
    }
}

impl fmt::Display for ExportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportOutcome::Saved(path) => write!(f, "Image saved to {}", path.display()),
            ExportOutcome::Failed(message) => write!(f, "Error saving image: {message}"),
            ExportOutcome::Cancelled => write!(f, "Export cancelled"),
        }
    }
}

/// Errors that can occur while rasterizing or writing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Canvas has invalid dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] cairo::IoError),

    #[error("Could not determine export directory")]
    NoDirectory,
}
