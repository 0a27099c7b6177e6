//! Error types for drawing-surface operations.

use thiserror::Error;

/// Result type for drawing-surface operations.
pub type Result<T> = std::result::Result<T, DrawError>;

/// Errors surfaced to the caller of a drawing operation.
///
/// Graceful fallbacks (unsupported brushes, custom end caps) and absorbed
/// scoping underflows are not errors and never appear here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    /// The operation has no vector equivalent and no approved approximation.
    #[error("{operation} is not supported by the SVG rendering target")]
    Unsupported { operation: &'static str },

    /// The arguments describe geometry that cannot be drawn at all.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl DrawError {
    pub fn unsupported(operation: &'static str) -> Self {
        DrawError::Unsupported { operation }
    }

    /// The operation name when this is an `Unsupported` error.
    pub fn unsupported_operation(&self) -> Option<&'static str> {
        match self {
            DrawError::Unsupported { operation } => Some(operation),
            DrawError::InvalidArgument(_) => None,
        }
    }
}
