//! # Mesh Errors
//!
//! Error types for mesh generation operations.

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MeshError {
    /// Degenerate geometry (non-finite or negative dimensions)
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Circle segment count outside the configured range
    #[error("Invalid segment count: {segments} (expected {min}..={max})")]
    InvalidSegments { segments: u32, min: u32, max: u32 },

    /// Mesh validation failed
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a validation failed error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_message() {
        let err = MeshError::degenerate("cube width must be a finite non-negative number, got -1");
        assert!(err.to_string().starts_with("Degenerate geometry: cube width"));
    }

    #[test]
    fn test_segments_message() {
        let err = MeshError::InvalidSegments {
            segments: 2,
            min: 3,
            max: 1024,
        };
        assert_eq!(err.to_string(), "Invalid segment count: 2 (expected 3..=1024)");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
