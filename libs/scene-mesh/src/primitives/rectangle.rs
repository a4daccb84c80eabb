//! # Rectangle Primitive

use super::{check_dimension, check_origin};
use crate::error::MeshResult;
use crate::mesh::EncodedMesh;
use glam::DVec3;

/// Creates an axis-aligned rectangle in the plane `z = origin.z`.
///
/// Vertices run counter-clockwise from `origin`; the two triangles fan from
/// corner 0 as `(0, 1, 2)` and `(0, 2, 3)`.
///
/// # Example
///
/// ```rust
/// use scene_mesh::primitives::create_rectangle;
/// use glam::DVec3;
///
/// let mesh = create_rectangle(DVec3::ZERO, 2.0, 3.0).unwrap();
/// assert_eq!(mesh.faces, vec![0, 0, 1, 2, 0, 0, 2, 3]);
/// ```
pub fn create_rectangle(origin: DVec3, width: f64, height: f64) -> MeshResult<EncodedMesh> {
    check_origin(origin)?;
    check_dimension("rectangle", "width", width)?;
    check_dimension("rectangle", "height", height)?;

    let mut mesh = EncodedMesh::with_capacity(4, 2);
    let v0 = mesh.add_vertex(origin);
    let v1 = mesh.add_vertex(origin + DVec3::new(width, 0.0, 0.0));
    let v2 = mesh.add_vertex(origin + DVec3::new(width, height, 0.0));
    let v3 = mesh.add_vertex(origin + DVec3::new(0.0, height, 0.0));

    mesh.add_triangle(v0, v1, v2);
    mesh.add_triangle(v0, v2, v3);

    mesh.update_bounds();
    mesh.area = width * height;
    mesh.volume = 0.0;
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_two_by_three() {
        let mesh = create_rectangle(DVec3::ZERO, 2.0, 3.0).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.faces.len(), 8);
        assert_eq!(mesh.area, 6.0);
        assert_eq!(mesh.volume, 0.0);
    }

    #[test]
    fn test_rectangle_corners() {
        let mesh = create_rectangle(DVec3::new(3.0, 0.0, 0.0), 1.5, 1.0).unwrap();
        assert_eq!(mesh.vertex(2), Some(DVec3::new(4.5, 1.0, 0.0)));
        assert_eq!(mesh.bbox_min, [3.0, 0.0, 0.0]);
        assert_eq!(mesh.bbox_max, [4.5, 1.0, 0.0]);
    }

    #[test]
    fn test_rectangle_faces_are_ccw() {
        let mesh = create_rectangle(DVec3::ZERO, 1.0, 1.0).unwrap();
        for tri in mesh.triangle_indices().chunks_exact(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| mesh.vertex(i as usize).unwrap());
            assert!((b - a).cross(c - a).z > 0.0);
        }
    }
}
