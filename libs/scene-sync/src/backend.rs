//! # Render Backend Contract
//!
//! What the synchronizer needs from a renderer, and the renderer-ready
//! primitive it hands over.

use glam::Mat4;
use scene_mesh::{faces::decode_faces, GeneratedGeometry};
use std::collections::BTreeMap;

// =============================================================================
// PRIMITIVE
// =============================================================================

/// GPU-ready buffers for one primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveGeometry {
    /// Vertex positions (xyz, f32)
    pub positions: Vec<f32>,
    /// Triangle indices (3 per triangle)
    pub indices: Vec<u32>,
    /// Per-vertex RGB in `0.0..=1.0`, if the mesh is colored
    pub colors: Option<Vec<f32>>,
}

impl PrimitiveGeometry {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Material hints for the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialSpec {
    pub name: String,
    pub vertex_colors: bool,
    pub double_sided: bool,
}

/// Geometry, material and transform for one generated record.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPrimitive {
    /// Source record id
    pub id: String,
    pub name: String,
    pub geometry: PrimitiveGeometry,
    pub material: MaterialSpec,
    /// Model matrix (column-major, as glam stores it)
    pub transform: Mat4,
    pub properties: BTreeMap<String, String>,
}

impl RenderPrimitive {
    /// Builds a primitive, decoding the mesh faces into an index buffer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use scene_mesh::PrimitiveGenerator;
    /// use scene_model::{GeometryRecord, Shape};
    /// use scene_sync::RenderPrimitive;
    /// use std::collections::BTreeMap;
    ///
    /// let record = GeometryRecord::new(Shape::rectangle(1.0, 1.0), [0.0; 3]);
    /// let generated = PrimitiveGenerator::default().generate(&record, &BTreeMap::new()).unwrap();
    /// let primitive = RenderPrimitive::from_generated(&generated);
    /// assert_eq!(primitive.geometry.indices, vec![0, 1, 2, 0, 2, 3]);
    /// ```
    pub fn from_generated(generated: &GeneratedGeometry) -> Self {
        let mesh = &generated.mesh;
        let colors = (!mesh.colors.is_empty()).then(|| mesh.normalized_colors());

        Self {
            id: generated.id.clone(),
            name: generated.name.clone(),
            material: MaterialSpec {
                name: generated.material.clone(),
                vertex_colors: colors.is_some(),
                double_sided: true,
            },
            geometry: PrimitiveGeometry {
                positions: mesh.positions_f32(),
                indices: decode_faces(&mesh.faces),
                colors,
            },
            transform: generated.transform.to_dmat4().as_mat4(),
            properties: generated.properties.clone(),
        }
    }
}

// =============================================================================
// BACKEND
// =============================================================================

/// Operations the synchronizer drives on a renderer.
///
/// Each call may suspend until the renderer acknowledges it. All three must
/// be harmless on an empty scene.
#[allow(async_fn_in_trait)]
pub trait RenderBackend {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Removes every primitive added through [`add_primitive`](Self::add_primitive).
    /// Reference geometry loaded by other means stays.
    async fn remove_all_generated_primitives(&mut self) -> Result<(), Self::Error>;

    async fn add_primitive(&mut self, primitive: RenderPrimitive) -> Result<(), Self::Error>;

    async fn request_redraw(&mut self) -> Result<(), Self::Error>;
}
