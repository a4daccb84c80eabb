use super::*;
use approx::assert_relative_eq;
use crate::memory::MemoryBackend;
use scene_model::{GeometryRecord, SceneConfig, Shape};
use std::fmt;

// =============================================================================
// TEST BACKENDS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    RemoveAll,
    Add(String),
    Redraw,
}

/// Records every call and yields to the scheduler inside each one so an
/// overlapping rebuild would get a chance to interleave.
#[derive(Debug, Default)]
struct RecordingBackend {
    events: Vec<Event>,
}

impl RenderBackend for RecordingBackend {
    type Error = std::convert::Infallible;

    async fn remove_all_generated_primitives(&mut self) -> Result<(), Self::Error> {
        tokio::task::yield_now().await;
        self.events.push(Event::RemoveAll);
        Ok(())
    }

    async fn add_primitive(&mut self, primitive: RenderPrimitive) -> Result<(), Self::Error> {
        tokio::task::yield_now().await;
        self.events.push(Event::Add(primitive.id));
        Ok(())
    }

    async fn request_redraw(&mut self) -> Result<(), Self::Error> {
        self.events.push(Event::Redraw);
        Ok(())
    }
}

#[derive(Debug)]
struct DeviceLost;

impl fmt::Display for DeviceLost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("device lost")
    }
}

impl std::error::Error for DeviceLost {}

/// Fails on the second `add_primitive`.
#[derive(Debug, Default)]
struct FlakyBackend {
    added: usize,
    redraws: usize,
}

impl RenderBackend for FlakyBackend {
    type Error = DeviceLost;

    async fn remove_all_generated_primitives(&mut self) -> Result<(), Self::Error> {
        self.added = 0;
        Ok(())
    }

    async fn add_primitive(&mut self, _primitive: RenderPrimitive) -> Result<(), Self::Error> {
        if self.added == 1 {
            return Err(DeviceLost);
        }
        self.added += 1;
        Ok(())
    }

    async fn request_redraw(&mut self) -> Result<(), Self::Error> {
        self.redraws += 1;
        Ok(())
    }
}

fn one_rebuild(ids: &[String]) -> Vec<Event> {
    std::iter::once(Event::RemoveAll)
        .chain(ids.iter().cloned().map(Event::Add))
        .chain(std::iter::once(Event::Redraw))
        .collect()
}

fn record_ids(store: &GeometryStore) -> Vec<String> {
    store.records().iter().map(|r| r.id().to_string()).collect()
}

// =============================================================================
// REBUILD
// =============================================================================

#[tokio::test]
async fn test_sync_adds_every_record_in_order() {
    let store = GeometryStore::new(SceneConfig::example());
    let synchronizer = SceneSynchronizer::new(MemoryBackend::new());

    let report = synchronizer.sync(&store).await.unwrap();
    assert_eq!(report.added, 4);
    assert!(report.skipped.is_empty());
    assert_eq!(synchronizer.state(), SyncState::Idle);

    let backend = synchronizer.into_backend();
    let names: Vec<_> = backend.primitives().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Red Triangle", "Green Rectangle", "Blue Cube", "Yellow Circle"]);
    assert_eq!(backend.redraw_count(), 1);
}

#[tokio::test]
async fn test_primitive_buffers() {
    let store = GeometryStore::new(SceneConfig::example());
    let synchronizer = SceneSynchronizer::new(MemoryBackend::new());
    synchronizer.sync(&store).await.unwrap();

    let backend = synchronizer.into_backend();
    let cube = backend.primitive(2).unwrap();
    assert_eq!(cube.geometry.vertex_count(), 8);
    assert_eq!(cube.geometry.triangle_count(), 12);
    assert_eq!(cube.material.name, "basic");
    assert!(cube.material.vertex_colors);
    assert!(cube.material.double_sided);
    let colors = cube.geometry.colors.as_ref().unwrap();
    assert_relative_eq!(colors[0], 0.0);
    assert_relative_eq!(colors[2], 1.0);
    // cube minimum corner sits at its record position
    assert_relative_eq!(cube.geometry.positions[1], 3.0);
    assert_eq!(cube.transform, glam::Mat4::IDENTITY);
    assert_eq!(cube.properties["type"], "example");
    assert_eq!(cube.properties["priority"], "low");
}

#[tokio::test]
async fn test_resync_replaces_previous_primitives() {
    let mut store = GeometryStore::new(SceneConfig::example());
    let synchronizer = SceneSynchronizer::new(MemoryBackend::new());
    synchronizer.sync(&store).await.unwrap();

    store.remove(0);
    synchronizer.sync(&store).await.unwrap();

    let count = synchronizer.with_backend(|b| b.primitives().len()).await;
    assert_eq!(count, 3);
}

#[tokio::test]
async fn test_empty_store_still_redraws() {
    let store = GeometryStore::default();
    let synchronizer = SceneSynchronizer::new(MemoryBackend::new());

    let report = synchronizer.sync(&store).await.unwrap();
    assert_eq!(report.added, 0);

    let backend = synchronizer.into_backend();
    assert!(backend.primitives().is_empty());
    assert_eq!(backend.redraw_count(), 1);
}

#[tokio::test]
async fn test_reference_geometry_survives_rebuild() {
    let store = GeometryStore::new(SceneConfig::example());
    let mut backend = MemoryBackend::new();

    let generated = store.generate();
    backend.add_reference(RenderPrimitive::from_generated(&generated.geometries[0]));

    let synchronizer = SceneSynchronizer::new(backend);
    synchronizer.sync(&store).await.unwrap();
    synchronizer.sync(&store).await.unwrap();

    let backend = synchronizer.into_backend();
    assert_eq!(backend.references().len(), 1);
    assert_eq!(backend.primitives().len(), 4);
}

#[tokio::test]
async fn test_skipped_records_are_reported() {
    let mut store = GeometryStore::new(SceneConfig::example());
    store.add(GeometryRecord::new(Shape::triangle(f64::INFINITY, 1.0), [0.0; 3]));

    let synchronizer = SceneSynchronizer::new(MemoryBackend::new());
    let report = synchronizer.sync(&store).await.unwrap();
    assert_eq!(report.added, 4);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].index, 4);
}

#[tokio::test]
async fn test_backend_failure_propagates_and_keeps_store() {
    let store = GeometryStore::new(SceneConfig::example());
    let before = record_ids(&store);
    let synchronizer = SceneSynchronizer::new(FlakyBackend::default());

    let err = synchronizer.sync(&store).await.unwrap_err();
    assert!(matches!(err, SyncError::Backend(_)));
    assert_eq!(err.to_string(), "Render backend error: device lost");
    assert_eq!(record_ids(&store), before);

    assert_eq!(synchronizer.state(), SyncState::Idle);
    assert_eq!(synchronizer.into_backend().redraws, 0);
}

// =============================================================================
// OVERLAP
// =============================================================================

#[tokio::test]
async fn test_overlapping_sync_is_rejected() {
    let store = GeometryStore::new(SceneConfig::example());
    let synchronizer = SceneSynchronizer::new(RecordingBackend::default());

    let (first, second) = tokio::join!(synchronizer.sync(&store), synchronizer.sync(&store));

    assert_eq!(first.unwrap().added, 4);
    assert!(matches!(second, Err(SyncError::RebuildInProgress)));

    let events = synchronizer.into_backend().events;
    assert_eq!(events, one_rebuild(&record_ids(&store)));
}

#[tokio::test]
async fn test_queued_syncs_run_back_to_back() {
    let store = GeometryStore::new(SceneConfig::example());
    let synchronizer = SceneSynchronizer::new(RecordingBackend::default());

    let (first, second) = tokio::join!(
        synchronizer.sync_queued(&store),
        synchronizer.sync_queued(&store)
    );
    assert!(first.is_ok());
    assert!(second.is_ok());

    let mut expected = one_rebuild(&record_ids(&store));
    expected.extend(one_rebuild(&record_ids(&store)));
    assert_eq!(synchronizer.into_backend().events, expected);
}

#[tokio::test]
async fn test_state_while_rebuilding() {
    let store = GeometryStore::new(SceneConfig::example());
    let synchronizer = SceneSynchronizer::new(RecordingBackend::default());

    let probe = async {
        tokio::task::yield_now().await;
        synchronizer.state()
    };
    let (result, observed) = tokio::join!(synchronizer.sync(&store), probe);

    assert!(result.is_ok());
    assert_eq!(observed, SyncState::Rebuilding);
    assert_eq!(synchronizer.state(), SyncState::Idle);
}
