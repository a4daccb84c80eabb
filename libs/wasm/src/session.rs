//! # Scene Session
//!
//! One store and one synchronizer, constructed together and handed to the
//! host. Every panel action goes through this object.

use crate::error::SessionError;
use crate::mesh_handle::MeshHandle;
use config::constants::{DEFAULT_POSITION_COMPONENT, DEFAULT_SIZE_COMPONENT};
use scene_io::{decode_rows, encode_rows, export_json};
use scene_model::{ColorInput, GeometryRecord, SceneConfig};
use scene_sync::{GeometryStore, MemoryBackend, SceneSynchronizer};
use wasm_bindgen::prelude::*;

/// Outcome of a CSV import.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct ImportSummary {
    imported: usize,
    warnings: Vec<String>,
}

#[wasm_bindgen]
impl ImportSummary {
    #[wasm_bindgen(getter)]
    pub fn imported(&self) -> usize {
        self.imported
    }

    /// One message per skipped row.
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.clone()
    }
}

/// Browser-side scene state.
#[wasm_bindgen]
pub struct SceneSession {
    store: GeometryStore,
    synchronizer: SceneSynchronizer<MemoryBackend>,
}

impl Default for SceneSession {
    fn default() -> Self {
        Self::with_scene(SceneConfig::default())
    }
}

// =============================================================================
// JAVASCRIPT API
// =============================================================================

#[wasm_bindgen]
impl SceneSession {
    /// Empty session.
    #[wasm_bindgen(constructor)]
    pub fn new() -> SceneSession {
        Self::default()
    }

    /// Session preloaded with the four-shape demo scene.
    pub fn example() -> SceneSession {
        Self::with_scene(SceneConfig::example())
    }

    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.store.scene().name.clone()
    }

    /// Adds a shape from panel input and returns its id.
    ///
    /// Missing position components default to 0, missing size components to 1.
    pub fn add_shape(
        &mut self,
        kind: &str,
        position: Vec<f64>,
        size: Vec<f64>,
        color: &str,
    ) -> Result<String, JsValue> {
        Ok(self.add_shape_internal(kind, &position, &size, color)?)
    }

    /// Replaces the shape at `index`. Returns false if out of range.
    pub fn update_shape(
        &mut self,
        index: usize,
        kind: &str,
        position: Vec<f64>,
        size: Vec<f64>,
        color: &str,
    ) -> Result<bool, JsValue> {
        Ok(self.update_shape_internal(index, kind, &position, &size, color)?)
    }

    /// Removes the shape at `index`. Returns false if out of range.
    pub fn remove(&mut self, index: usize) -> bool {
        self.store.remove(index).is_some()
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Replaces the store with the rows of a CSV payload.
    pub fn import_csv(&mut self, text: &str) -> Result<ImportSummary, JsValue> {
        Ok(self.import_csv_internal(text)?)
    }

    /// Pretty-printed JSON snapshot of the scene.
    pub fn export_json(&self) -> Result<String, JsValue> {
        Ok(self.export_json_internal()?)
    }

    /// CSV document with one row per shape.
    pub fn export_csv(&self) -> String {
        encode_rows(self.store.records())
    }

    /// Rebuilds the render scene and returns the primitive count.
    pub fn sync(&self) -> Result<usize, JsValue> {
        Ok(self.sync_internal()?)
    }

    pub fn primitive_count(&self) -> usize {
        pollster::block_on(self.synchronizer.with_backend(|b| b.primitives().len()))
    }

    /// Buffers for the primitive at `index` after the last sync.
    pub fn primitive(&self, index: usize) -> Option<MeshHandle> {
        pollster::block_on(
            self.synchronizer
                .with_backend(|b| b.primitive(index).map(MeshHandle::from)),
        )
    }
}

// =============================================================================
// RUST API
// =============================================================================

impl SceneSession {
    pub fn with_scene(scene: SceneConfig) -> Self {
        Self {
            store: GeometryStore::new(scene),
            synchronizer: SceneSynchronizer::new(MemoryBackend::new()),
        }
    }

    pub fn store(&self) -> &GeometryStore {
        &self.store
    }

    pub fn add_shape_internal(
        &mut self,
        kind: &str,
        position: &[f64],
        size: &[f64],
        color: &str,
    ) -> Result<String, SessionError> {
        let record = record_from_input(kind, position, size, color)?;
        let id = record.id().to_string();
        self.store.add(record);
        Ok(id)
    }

    pub fn update_shape_internal(
        &mut self,
        index: usize,
        kind: &str,
        position: &[f64],
        size: &[f64],
        color: &str,
    ) -> Result<bool, SessionError> {
        let record = record_from_input(kind, position, size, color)?;
        Ok(self.store.update(index, record).is_some())
    }

    /// Clears and re-populates the store. On error the store is untouched.
    pub fn import_csv_internal(&mut self, text: &str) -> Result<ImportSummary, SessionError> {
        let report = decode_rows(text)?;
        log::info!(
            "importing {} records into '{}' ({} rows skipped)",
            report.records.len(),
            self.store.scene().name,
            report.warnings.len()
        );
        let summary = ImportSummary {
            imported: report.records.len(),
            warnings: report.warnings.iter().map(ToString::to_string).collect(),
        };
        self.store.replace_all(report.records);
        Ok(summary)
    }

    pub fn export_json_internal(&self) -> Result<String, SessionError> {
        Ok(export_json(self.store.scene())?)
    }

    pub fn sync_internal(&self) -> Result<usize, SessionError> {
        let report = pollster::block_on(self.synchronizer.sync(&self.store))?;
        if !report.skipped.is_empty() {
            log::warn!(
                "{} of {} records could not be displayed",
                report.skipped.len(),
                self.store.len()
            );
        }
        Ok(report.added)
    }
}

fn record_from_input(
    kind: &str,
    position: &[f64],
    size: &[f64],
    color: &str,
) -> Result<GeometryRecord, SessionError> {
    let position = padded(position, DEFAULT_POSITION_COMPONENT);
    let size = padded(size, DEFAULT_SIZE_COMPONENT);
    let record = GeometryRecord::from_kind_name(kind, position, size)?;
    Ok(record.with_color(ColorInput::from(color)))
}

/// First three values, padding missing ones with `default`.
fn padded(values: &[f64], default: f64) -> [f64; 3] {
    [0, 1, 2].map(|i| values.get(i).copied().unwrap_or(default))
}
