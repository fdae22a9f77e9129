//! Error types for stylization, profiling and profile persistence

use std::fmt;
use std::path::PathBuf;

/// Main error type for all stylization and analysis operations
#[derive(Debug)]
pub enum StyleError {
    /// Buffer dimensions are zero, mismatched, or disagree with the pixel data length
    InvalidDimensions {
        /// Width that was provided
        width: u32,
        /// Height that was provided
        height: u32,
        /// What is wrong with the dimensions
        reason: String,
    },

    /// An operation that needs at least one input received none
    EmptyInput {
        /// Name of the operation that had nothing to work on
        operation: &'static str,
    },

    /// Imported profile data is incomplete or carries out-of-range values
    MalformedProfile {
        /// Description of the first problem found
        reason: String,
    },

    /// A command-line target is neither a supported image nor a directory
    UnsupportedInput {
        /// Offending path
        path: PathBuf,
        /// Why it was rejected
        reason: String,
    },

    /// Failed to load a source or reference image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to write a stylized image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Profile could not be encoded for export
    Serialization {
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// A raster surface could not be created or drawn
    Render {
        /// Name of the rendering step
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions {
                width,
                height,
                reason,
            } => {
                write!(f, "Invalid dimensions {width}x{height}: {reason}")
            }
            Self::EmptyInput { operation } => {
                write!(f, "No input provided to {operation}")
            }
            Self::MalformedProfile { reason } => {
                write!(f, "Malformed style profile: {reason}")
            }
            Self::UnsupportedInput { path, reason } => {
                write!(f, "Unsupported input '{}': {reason}", path.display())
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { source } => {
                write!(f, "Failed to serialize style profile: {source}")
            }
            Self::Render { operation, reason } => {
                write!(f, "Rendering error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for StyleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for stylization results
pub type Result<T> = std::result::Result<T, StyleError>;

/// Create an invalid dimensions error
pub fn invalid_dimensions(width: u32, height: u32, reason: &impl ToString) -> StyleError {
    StyleError::InvalidDimensions {
        width,
        height,
        reason: reason.to_string(),
    }
}

/// Create a malformed profile error
pub fn malformed_profile(reason: &impl ToString) -> StyleError {
    StyleError::MalformedProfile {
        reason: reason.to_string(),
    }
}

/// Create a rendering error
pub fn render_error(operation: &'static str, reason: &impl ToString) -> StyleError {
    StyleError::Render {
        operation,
        reason: reason.to_string(),
    }
}

