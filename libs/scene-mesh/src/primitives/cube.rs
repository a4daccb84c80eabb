//! # Cube Primitive
//!
//! Generates mesh for cube and rectangular prism shapes.

use super::{check_dimension, check_origin};
use crate::error::MeshResult;
use crate::mesh::EncodedMesh;
use glam::DVec3;

/// Creates a rectangular prism with its minimum corner at `origin`.
///
/// # Arguments
///
/// * `origin` - Minimum corner
/// * `size` - Dimensions [width, height, depth] along X, Y, Z
///
/// # Returns
///
/// A mesh with 8 vertices and 12 triangles (2 per face).
///
/// # Example
///
/// ```rust
/// use scene_mesh::primitives::create_cube;
/// use glam::DVec3;
///
/// let mesh = create_cube(DVec3::ZERO, DVec3::ONE).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_cube(origin: DVec3, size: DVec3) -> MeshResult<EncodedMesh> {
    check_origin(origin)?;
    check_dimension("cube", "width", size.x)?;
    check_dimension("cube", "height", size.y)?;
    check_dimension("cube", "depth", size.z)?;

    let mut mesh = EncodedMesh::with_capacity(8, 12);
    let (min, max) = (origin, origin + size);

    // Bottom face (z = min.z)
    let v0 = mesh.add_vertex(DVec3::new(min.x, min.y, min.z));
    let v1 = mesh.add_vertex(DVec3::new(max.x, min.y, min.z));
    let v2 = mesh.add_vertex(DVec3::new(max.x, max.y, min.z));
    let v3 = mesh.add_vertex(DVec3::new(min.x, max.y, min.z));

    // Top face (z = max.z)
    let v4 = mesh.add_vertex(DVec3::new(min.x, min.y, max.z));
    let v5 = mesh.add_vertex(DVec3::new(max.x, min.y, max.z));
    let v6 = mesh.add_vertex(DVec3::new(max.x, max.y, max.z));
    let v7 = mesh.add_vertex(DVec3::new(min.x, max.y, max.z));

    // Counter-clockwise seen from outside
    mesh.add_triangle(v0, v2, v1);
    mesh.add_triangle(v0, v3, v2);

    mesh.add_triangle(v4, v5, v6);
    mesh.add_triangle(v4, v6, v7);

    mesh.add_triangle(v0, v1, v5);
    mesh.add_triangle(v0, v5, v4);

    mesh.add_triangle(v2, v3, v7);
    mesh.add_triangle(v2, v7, v6);

    mesh.add_triangle(v3, v0, v4);
    mesh.add_triangle(v3, v4, v7);

    mesh.add_triangle(v1, v2, v6);
    mesh.add_triangle(v1, v6, v5);

    mesh.set_bounds(min, max);
    mesh.area = 2.0 * (size.x * size.y + size.x * size.z + size.y * size.z);
    mesh.volume = size.x * size.y * size.z;
    Ok(mesh)
}
