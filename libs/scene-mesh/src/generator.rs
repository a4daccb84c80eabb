//! # Primitive Generator
//!
//! Turns [`GeometryRecord`]s into [`EncodedMesh`]es with display metadata.
//! Generation reads records only; a failing record never affects the others.

use crate::error::{MeshError, MeshResult};
use crate::mesh::EncodedMesh;
use crate::primitives::{create_circle, create_cube, create_rectangle, create_triangle};
use config::constants::{GlobalConfig, MIN_SEGMENTS};
use glam::DVec3;
use scene_model::{merge_properties, GeometryKind, GeometryRecord, Shape, Transform};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// OUTPUT TYPES
// =============================================================================

/// An encoded mesh plus everything the render step needs to display it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedGeometry {
    /// Id of the source record
    pub id: String,
    /// Stable `<kind>-<name>` label, `auto` when the record is unnamed
    pub application_id: String,
    pub kind: GeometryKind,
    pub name: String,
    pub description: String,
    pub material: String,
    /// Applied at render time, never baked into vertices
    pub transform: Transform,
    /// Scene properties overlaid with record properties
    pub properties: BTreeMap<String, String>,
    pub mesh: EncodedMesh,
}

/// A record that could not be generated.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    pub index: usize,
    pub id: String,
    pub error: MeshError,
}

/// Result of a batch generation: successes in record order plus skips.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationReport {
    pub geometries: Vec<GeneratedGeometry>,
    pub skipped: Vec<SkippedRecord>,
}

impl GenerationReport {
    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }
}

// =============================================================================
// GENERATOR
// =============================================================================

/// Builds meshes for records using a validated configuration snapshot.
///
/// # Example
///
/// ```rust
/// use scene_mesh::PrimitiveGenerator;
/// use scene_model::{GeometryRecord, Shape};
/// use std::collections::BTreeMap;
///
/// let generator = PrimitiveGenerator::default();
/// let record = GeometryRecord::new(Shape::circle(1.0), [0.0; 3]);
/// let geometry = generator.generate(&record, &BTreeMap::new()).unwrap();
/// assert_eq!(geometry.name, "Generated Circle");
/// assert_eq!(geometry.mesh.vertex_count(), 18);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimitiveGenerator {
    config: GlobalConfig,
}

impl PrimitiveGenerator {
    pub fn new(config: GlobalConfig) -> Self {
        Self { config }
    }

    /// Encodes the record's shape at its position, painted in its color.
    pub fn encode(&self, record: &GeometryRecord) -> MeshResult<EncodedMesh> {
        let origin = DVec3::from_array(record.position);
        let mut mesh = match *record.shape() {
            Shape::Triangle { width, height } => create_triangle(origin, width, height)?,
            Shape::Rectangle { width, height } => create_rectangle(origin, width, height)?,
            Shape::Cube { width, height, depth } => {
                create_cube(origin, DVec3::new(width, height, depth))?
            }
            Shape::Circle { radius, segments } => {
                create_circle(origin, radius, self.resolve_segments(segments)?)?
            }
        };
        mesh.set_uniform_color(record.color);
        Ok(mesh)
    }

    /// Encodes the record and attaches its display metadata.
    pub fn generate(
        &self,
        record: &GeometryRecord,
        global_properties: &BTreeMap<String, String>,
    ) -> MeshResult<GeneratedGeometry> {
        let mesh = self.encode(record)?;
        let kind = record.kind();

        log::debug!(
            "generated {} {}: {} vertices, {} faces",
            kind,
            record.id(),
            mesh.vertex_count(),
            mesh.triangle_count()
        );

        Ok(GeneratedGeometry {
            id: record.id().to_string(),
            application_id: format!("{}-{}", kind, record.name.as_deref().unwrap_or("auto")),
            kind,
            name: record
                .name
                .clone()
                .unwrap_or_else(|| format!("Generated {}", kind.display_name())),
            description: record
                .description
                .clone()
                .unwrap_or_else(|| format!("Auto-generated {kind} geometry")),
            material: record.material_name().to_string(),
            transform: record.transform(),
            properties: merge_properties(global_properties, &record.properties),
            mesh,
        })
    }

    /// Generates every record in order, skipping and reporting failures.
    pub fn generate_all<'a>(
        &self,
        records: impl IntoIterator<Item = &'a GeometryRecord>,
        global_properties: &BTreeMap<String, String>,
    ) -> GenerationReport {
        let mut report = GenerationReport::default();
        for (index, record) in records.into_iter().enumerate() {
            match self.generate(record, global_properties) {
                Ok(geometry) => report.geometries.push(geometry),
                Err(error) => {
                    log::warn!("skipping record {} ({}): {}", index, record.id(), error);
                    report.skipped.push(SkippedRecord {
                        index,
                        id: record.id().to_string(),
                        error,
                    });
                }
            }
        }
        report
    }

    fn resolve_segments(&self, requested: Option<u32>) -> MeshResult<u32> {
        let segments = requested.unwrap_or(self.config.default_segments);
        if !(MIN_SEGMENTS..=self.config.max_segments).contains(&segments) {
            return Err(MeshError::InvalidSegments {
                segments,
                min: MIN_SEGMENTS,
                max: self.config.max_segments,
            });
        }
        Ok(segments)
    }
}
