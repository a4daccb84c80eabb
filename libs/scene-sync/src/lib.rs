//! # Scene Sync
//!
//! Keeps a render scene consistent with the geometry store.
//!
//! ## Architecture
//!
//! ```text
//! GeometryStore ──generate──► GeneratedGeometry ──decode faces──► RenderPrimitive
//!                                                                     │
//! SceneSynchronizer ── remove all → add each → redraw ──► RenderBackend
//! ```
//!
//! Every sync is a full rebuild. A second [`SceneSynchronizer::sync`] while
//! one is running is rejected with [`SyncError::RebuildInProgress`];
//! [`SceneSynchronizer::sync_queued`] waits its turn instead.
//!
//! ## Usage
//!
//! ```rust
//! use scene_model::SceneConfig;
//! use scene_sync::{GeometryStore, MemoryBackend, SceneSynchronizer};
//!
//! let store = GeometryStore::new(SceneConfig::example());
//! let synchronizer = SceneSynchronizer::new(MemoryBackend::new());
//! let report = pollster::block_on(synchronizer.sync(&store)).unwrap();
//! assert_eq!(report.added, 4);
//! ```

pub mod backend;
pub mod error;
pub mod memory;
pub mod store;
pub mod synchronizer;

pub use backend::{MaterialSpec, PrimitiveGeometry, RenderBackend, RenderPrimitive};
pub use error::{SyncError, SyncResult};
pub use memory::MemoryBackend;
pub use store::GeometryStore;
pub use synchronizer::{SceneSynchronizer, SyncReport, SyncState};
