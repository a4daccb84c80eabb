//! # Sync Errors

use thiserror::Error;

/// Errors returned by [`SceneSynchronizer`](crate::SceneSynchronizer).
#[derive(Debug, Error)]
pub enum SyncError {
    /// Another rebuild holds the backend
    #[error("Scene rebuild already in progress")]
    RebuildInProgress,

    /// The render backend failed; the store is untouched but the rendered
    /// scene may be partial until the next successful sync
    #[error("Render backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SyncError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Box::new(err))
    }
}

/// Result type alias for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_backend_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gpu lost");
        let err = SyncError::backend(io);
        assert_eq!(err.to_string(), "Render backend error: gpu lost");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SyncError>();
    }
}
