//! # Triangle Primitive
//!
//! Right triangle with legs along +X and +Y, lying in the plane `z = origin.z`.

use super::{check_dimension, check_origin};
use crate::error::MeshResult;
use crate::mesh::EncodedMesh;
use glam::DVec3;

/// Creates a right triangle mesh.
///
/// # Arguments
///
/// * `origin` - Right-angle corner
/// * `width` - Leg length along X
/// * `height` - Leg length along Y
///
/// # Returns
///
/// A mesh with 3 vertices and 1 triangle.
///
/// # Example
///
/// ```rust
/// use scene_mesh::primitives::create_triangle;
/// use glam::DVec3;
///
/// let mesh = create_triangle(DVec3::ZERO, 2.0, 2.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.area, 2.0);
/// ```
pub fn create_triangle(origin: DVec3, width: f64, height: f64) -> MeshResult<EncodedMesh> {
    check_origin(origin)?;
    check_dimension("triangle", "width", width)?;
    check_dimension("triangle", "height", height)?;

    let mut mesh = EncodedMesh::with_capacity(3, 1);
    let v0 = mesh.add_vertex(origin);
    let v1 = mesh.add_vertex(origin + DVec3::new(width, 0.0, 0.0));
    let v2 = mesh.add_vertex(origin + DVec3::new(0.0, height, 0.0));
    mesh.add_triangle(v0, v1, v2);

    mesh.update_bounds();
    mesh.area = width * height / 2.0;
    mesh.volume = 0.0;
    Ok(mesh)
}
