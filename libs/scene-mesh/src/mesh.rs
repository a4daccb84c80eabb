//! # Encoded Mesh
//!
//! Wire/storage form of a generated primitive: flat vertex, face and color
//! arrays plus precomputed bounds, area and volume.

use crate::error::{MeshError, MeshResult};
use crate::faces::{decode_faces, TRIANGLE_TAG};
use config::constants::DEFAULT_UNITS;
use glam::DVec3;
use scene_model::Rgb;
use serde::{Deserialize, Serialize};

/// A mesh in the flat face encoding.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the render boundary.
///
/// Invariants: `vertices.len() % 3 == 0`, and `colors` is either empty or
/// the same length as `vertices`.
///
/// # Example
///
/// ```rust
/// use scene_mesh::EncodedMesh;
/// use glam::DVec3;
///
/// let mut mesh = EncodedMesh::new();
/// let a = mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// let b = mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// let c = mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(a, b, c);
/// assert_eq!(mesh.faces, vec![0, 0, 1, 2]);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedMesh {
    /// Vertex positions as xyz triplets
    pub vertices: Vec<f64>,
    /// Tagged face sequence
    pub faces: Vec<u32>,
    /// Per-vertex RGB triplets, or empty
    pub colors: Vec<u8>,
    pub bbox_min: [f64; 3],
    pub bbox_max: [f64; 3],
    pub area: f64,
    pub volume: f64,
    pub units: String,
}

impl Default for EncodedMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl EncodedMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count * 3),
            faces: Vec::with_capacity(triangle_count * 4),
            colors: Vec::new(),
            bbox_min: [0.0; 3],
            bbox_max: [0.0; 3],
            area: 0.0,
            volume: 0.0,
            units: DEFAULT_UNITS.to_string(),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Returns the number of decodable triangles.
    pub fn triangle_count(&self) -> usize {
        decode_faces(&self.faces).len() / 3
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertex_count() as u32;
        self.vertices.extend_from_slice(&position.to_array());
        index
    }

    /// Appends a triangle face using the triangle shorthand tag.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.faces.extend_from_slice(&[TRIANGLE_TAG, v0, v1, v2]);
    }

    /// Returns the vertex at the given index, if present.
    pub fn vertex(&self, index: usize) -> Option<DVec3> {
        let start = index.checked_mul(3)?;
        self.vertices.get(start..start + 3).map(DVec3::from_slice)
    }

    /// Paints every vertex with the same color.
    pub fn set_uniform_color(&mut self, color: Rgb) {
        self.colors = color.channels().repeat(self.vertex_count());
    }

    /// Sets the bounds explicitly.
    pub fn set_bounds(&mut self, min: DVec3, max: DVec3) {
        self.bbox_min = min.to_array();
        self.bbox_max = max.to_array();
    }

    /// Computes the axis-aligned bounding box from the vertices.
    ///
    /// Returns (min, max) corners; an empty mesh yields zeros.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let mut points = self.vertices.chunks_exact(3).map(DVec3::from_slice);
        let Some(first) = points.next() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        points.fold((first, first), |(min, max), v| (min.min(v), max.max(v)))
    }

    /// Recomputes `bbox_min`/`bbox_max` from the vertices.
    pub fn update_bounds(&mut self) {
        let (min, max) = self.bounding_box();
        self.set_bounds(min, max);
    }

    /// Vertex positions narrowed to f32 for GPU upload.
    pub fn positions_f32(&self) -> Vec<f32> {
        self.vertices.iter().map(|&v| v as f32).collect()
    }

    /// Colors scaled to `0.0..=1.0`.
    pub fn normalized_colors(&self) -> Vec<f32> {
        self.colors.iter().map(|&c| f32::from(c) / 255.0).collect()
    }

    /// Decoded triangle index list.
    pub fn triangle_indices(&self) -> Vec<u32> {
        decode_faces(&self.faces)
    }

    /// Checks the length invariants and that every decoded index is in range.
    ///
    /// # Example
    ///
    /// ```rust
    /// use scene_mesh::EncodedMesh;
    ///
    /// let mut mesh = EncodedMesh::new();
    /// mesh.add_triangle(0, 1, 2);
    /// assert!(mesh.validate().is_err());
    /// ```
    pub fn validate(&self) -> MeshResult<()> {
        if self.vertices.len() % 3 != 0 {
            return Err(MeshError::validation(format!(
                "vertex array length {} is not a multiple of 3",
                self.vertices.len()
            )));
        }

        if !self.colors.is_empty() && self.colors.len() != self.vertices.len() {
            return Err(MeshError::validation(format!(
                "color array length {} does not match vertex array length {}",
                self.colors.len(),
                self.vertices.len()
            )));
        }

        let vertex_count = self.vertex_count();
        if let Some(bad) = self
            .triangle_indices()
            .into_iter()
            .find(|&i| i as usize >= vertex_count)
        {
            return Err(MeshError::validation(format!(
                "face index {bad} out of range for {vertex_count} vertices"
            )));
        }

        Ok(())
    }
}
