//! # Scene Synchronizer
//!
//! Projects the store into the render backend as a full rebuild:
//!
//! 1. remove every generated primitive
//! 2. generate the store (an empty result skips to the redraw)
//! 3. decode faces and add one primitive per mesh
//! 4. request a redraw
//!
//! The backend sits behind an async mutex. Holding the guard is the
//! `Rebuilding` state, so two rebuilds can never interleave their
//! remove/add calls.

use crate::backend::{RenderBackend, RenderPrimitive};
use crate::error::{SyncError, SyncResult};
use crate::store::GeometryStore;
use scene_mesh::SkippedRecord;
use tokio::sync::Mutex;

/// Whether a rebuild currently holds the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Idle,
    Rebuilding,
}

/// Outcome of one rebuild.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncReport {
    /// Primitives registered with the backend
    pub added: usize,
    /// Records the generator rejected
    pub skipped: Vec<SkippedRecord>,
}

/// Drives a [`RenderBackend`] from a [`GeometryStore`].
pub struct SceneSynchronizer<B> {
    backend: Mutex<B>,
}

impl<B: RenderBackend> SceneSynchronizer<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend: Mutex::new(backend),
        }
    }

    /// Current state. Also reports `Rebuilding` while
    /// [`with_backend`](Self::with_backend) is inspecting the backend.
    pub fn state(&self) -> SyncState {
        match self.backend.try_lock() {
            Ok(_) => SyncState::Idle,
            Err(_) => SyncState::Rebuilding,
        }
    }

    /// Rebuilds the scene, failing fast if a rebuild is already running.
    ///
    /// # Errors
    ///
    /// [`SyncError::RebuildInProgress`] if another rebuild holds the backend,
    /// [`SyncError::Backend`] if any backend call fails.
    pub async fn sync(&self, store: &GeometryStore) -> SyncResult<SyncReport> {
        let mut backend = self.backend.try_lock().map_err(|_| {
            log::warn!("sync rejected: rebuild in progress");
            SyncError::RebuildInProgress
        })?;
        rebuild(&mut *backend, store).await
    }

    /// Rebuilds the scene, waiting for any running rebuild to finish first.
    /// Waiters are served in call order.
    pub async fn sync_queued(&self, store: &GeometryStore) -> SyncResult<SyncReport> {
        let mut backend = self.backend.lock().await;
        rebuild(&mut *backend, store).await
    }

    /// Runs `f` against the backend once no rebuild is running.
    pub async fn with_backend<R>(&self, f: impl FnOnce(&B) -> R) -> R {
        let backend = self.backend.lock().await;
        f(&backend)
    }

    pub fn into_backend(self) -> B {
        self.backend.into_inner()
    }
}

async fn rebuild<B: RenderBackend>(
    backend: &mut B,
    store: &GeometryStore,
) -> SyncResult<SyncReport> {
    backend
        .remove_all_generated_primitives()
        .await
        .map_err(SyncError::backend)?;

    let generated = store.generate();
    let mut report = SyncReport {
        added: 0,
        skipped: generated.skipped,
    };

    for geometry in &generated.geometries {
        let primitive = RenderPrimitive::from_generated(geometry);
        backend
            .add_primitive(primitive)
            .await
            .map_err(SyncError::backend)?;
        report.added += 1;
    }

    backend.request_redraw().await.map_err(SyncError::backend)?;

    log::info!(
        "scene rebuilt: {} primitives, {} records skipped",
        report.added,
        report.skipped.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests;
