//! # Model Errors
//!
//! Error types raised while resolving untyped input into records.

use thiserror::Error;

/// Errors that can occur while building records from untyped input.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    /// Kind name is not one of triangle, rectangle, cube, circle.
    #[error("Unsupported geometry kind: {kind}")]
    UnsupportedGeometryKind { kind: String },

    /// Transform matrix does not have 16 components.
    #[error("Transform matrix must have 16 components, got {len}")]
    InvalidTransform { len: usize },

    /// Color is neither `#RRGGBB` nor an in-range channel triple.
    #[error("Invalid color: {input}")]
    InvalidColor { input: String },
}

impl ModelError {
    /// Creates an unsupported kind error.
    pub fn unsupported_kind(kind: impl Into<String>) -> Self {
        Self::UnsupportedGeometryKind { kind: kind.into() }
    }

    /// Creates an invalid color error.
    pub fn invalid_color(input: impl Into<String>) -> Self {
        Self::InvalidColor { input: input.into() }
    }
}

/// Result type alias for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
