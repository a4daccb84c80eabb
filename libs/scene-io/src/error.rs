//! # Import Errors

use thiserror::Error;

/// Errors raised by the row codec and the export writer.
#[derive(Debug, Error)]
pub enum ImportError {
    /// No data row decoded; the caller must not touch the store
    #[error("Import payload contains no valid geometry rows")]
    EmptyImportPayload,

    /// Row skipped; surfaced as a warning, never fatal to the import
    #[error("Line {line}: {reason}")]
    MalformedImportRow { line: usize, reason: String },

    /// JSON serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ImportError {
    /// Creates a malformed row error.
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedImportRow {
            line,
            reason: reason.into(),
        }
    }
}

/// Result type alias for import/export operations.
pub type ImportResult<T> = Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_row_message() {
        let err = ImportError::malformed(3, "expected 9 fields, found 4");
        assert_eq!(err.to_string(), "Line 3: expected 9 fields, found 4");
    }

    #[test]
    fn test_serialization_from() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ImportError = json_err.into();
        assert!(matches!(err, ImportError::Serialization(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ImportError>();
    }
}
