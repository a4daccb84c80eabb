//! # Mesh Handle
//!
//! WASM-friendly copy of one render primitive's buffers.

use scene_sync::RenderPrimitive;
use wasm_bindgen::prelude::*;

/// Buffers for one primitive, ready for a `BufferGeometry`.
///
/// # Example (JavaScript)
///
/// ```javascript
/// session.sync();
/// for (let i = 0; i < session.primitive_count(); i++) {
///   const mesh = session.primitive(i);
///   const geometry = new THREE.BufferGeometry();
///   geometry.setAttribute('position', new THREE.BufferAttribute(mesh.vertices(), 3));
///   geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
///   if (mesh.has_colors) {
///     geometry.setAttribute('color', new THREE.BufferAttribute(mesh.colors(), 3));
///   }
///   object.matrix.fromArray(mesh.transform());
/// }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    id: String,
    name: String,
    material: String,
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, ...]
    indices: Vec<u32>,
    /// Optional vertex colors as [r, g, b, ...] in 0..=1
    colors: Option<Vec<f32>>,
    /// Column-major model matrix
    transform: [f32; 16],
}

#[wasm_bindgen]
impl MeshHandle {
    /// Source record id.
    #[wasm_bindgen(getter)]
    pub fn id(&self) -> String {
        self.id.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.name.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn material(&self) -> String {
        self.material.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[wasm_bindgen(getter)]
    pub fn has_colors(&self) -> bool {
        self.colors.is_some()
    }

    /// Returns the vertex buffer as a Float32Array.
    pub fn vertices(&self) -> Vec<f32> {
        self.vertices.clone()
    }

    /// Returns the index buffer as a Uint32Array.
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }

    /// Returns the color buffer, if the mesh is colored.
    pub fn colors(&self) -> Option<Vec<f32>> {
        self.colors.clone()
    }

    /// Column-major 4x4 matrix, the layout `Matrix4.fromArray` expects.
    pub fn transform(&self) -> Vec<f32> {
        self.transform.to_vec()
    }
}

impl From<&RenderPrimitive> for MeshHandle {
    fn from(primitive: &RenderPrimitive) -> Self {
        Self {
            id: primitive.id.clone(),
            name: primitive.name.clone(),
            material: primitive.material.name.clone(),
            vertices: primitive.geometry.positions.clone(),
            indices: primitive.geometry.indices.clone(),
            colors: primitive.geometry.colors.clone(),
            transform: primitive.transform.to_cols_array(),
        }
    }
}
