//! # Geometry Store
//!
//! The ordered, in-memory source of truth for what should be on screen.
//!
//! Index `i` names the same slot until a removal shifts later records down
//! by one. Out-of-range `remove`/`update` calls are silent no-ops.

use config::constants::GlobalConfig;
use scene_mesh::{GenerationReport, PrimitiveGenerator};
use scene_model::{GeometryRecord, SceneConfig};

/// Owns the scene and every record in it.
///
/// # Example
///
/// ```rust
/// use scene_model::{GeometryRecord, SceneConfig, Shape};
/// use scene_sync::GeometryStore;
///
/// let mut store = GeometryStore::new(SceneConfig::new("demo"));
/// store.add(GeometryRecord::new(Shape::cube(1.0, 1.0, 1.0), [0.0; 3]));
/// store.remove(7); // out of range, ignored
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeometryStore {
    scene: SceneConfig,
    generator: PrimitiveGenerator,
}

impl GeometryStore {
    pub fn new(scene: SceneConfig) -> Self {
        Self::with_config(scene, GlobalConfig::default())
    }

    pub fn with_config(scene: SceneConfig, config: GlobalConfig) -> Self {
        Self {
            scene,
            generator: PrimitiveGenerator::new(config),
        }
    }

    // =========================================================================
    // READ
    // =========================================================================

    pub fn scene(&self) -> &SceneConfig {
        &self.scene
    }

    pub fn records(&self) -> &[GeometryRecord] {
        &self.scene.geometries
    }

    pub fn get(&self, index: usize) -> Option<&GeometryRecord> {
        self.scene.geometries.get(index)
    }

    pub fn len(&self) -> usize {
        self.scene.geometries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scene.geometries.is_empty()
    }

    // =========================================================================
    // MUTATE
    // =========================================================================

    /// Appends a record.
    pub fn add(&mut self, record: GeometryRecord) {
        log::debug!("adding {} {}", record.kind(), record.id());
        self.scene.geometries.push(record);
    }

    /// Removes the record at `index`, if there is one.
    pub fn remove(&mut self, index: usize) -> Option<GeometryRecord> {
        if index >= self.len() {
            log::debug!("remove({index}) ignored, store has {} records", self.len());
            return None;
        }
        Some(self.scene.geometries.remove(index))
    }

    /// Replaces the record at `index` wholesale, returning the old one.
    pub fn update(&mut self, index: usize, record: GeometryRecord) -> Option<GeometryRecord> {
        if index >= self.len() {
            log::debug!("update({index}) ignored, store has {} records", self.len());
            return None;
        }
        Some(std::mem::replace(&mut self.scene.geometries[index], record))
    }

    pub fn clear(&mut self) {
        self.scene.geometries.clear();
    }

    /// Clears and re-populates in one step. An empty `records` leaves the
    /// store untouched and returns `false`.
    pub fn replace_all(&mut self, records: Vec<GeometryRecord>) -> bool {
        if records.is_empty() {
            return false;
        }
        log::info!("replacing {} records with {}", self.len(), records.len());
        self.scene.geometries = records;
        true
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.scene.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.scene.description = Some(description.into());
    }

    pub fn set_global_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.scene.global_properties.insert(key.into(), value.into());
    }

    // =========================================================================
    // GENERATE
    // =========================================================================

    /// Generates every record in order. Failing records are skipped and
    /// reported; the store is not modified.
    pub fn generate(&self) -> GenerationReport {
        self.generator
            .generate_all(&self.scene.geometries, &self.scene.global_properties)
    }
}

#[cfg(test)]
mod tests;
