//! # Circle Primitive
//!
//! Regular polygon approximation of a circle, triangulated as a fan around a
//! center vertex.

use super::{check_dimension, check_origin};
use crate::error::{MeshError, MeshResult};
use crate::mesh::EncodedMesh;
use config::constants::MIN_SEGMENTS;
use glam::DVec3;
use std::f64::consts::TAU;

/// Creates a circle in the plane `z = center.z`.
///
/// Vertex 0 is the center. Perimeter vertices `1..=segments + 1` walk
/// counter-clockwise from angle 0, the last one repeating the first
/// position. Faces are `(0, i, i + 1)` for `i` in `1..segments` plus the
/// closing face `(0, segments, 1)`.
///
/// Fewer than [`MIN_SEGMENTS`] segments is rejected; the upper bound is
/// enforced by the generator from its configuration.
///
/// # Example
///
/// ```rust
/// use scene_mesh::primitives::create_circle;
/// use glam::DVec3;
///
/// let mesh = create_circle(DVec3::ZERO, 1.0, 16).unwrap();
/// assert_eq!(mesh.vertex_count(), 18);
/// assert_eq!(mesh.triangle_count(), 16);
/// ```
pub fn create_circle(center: DVec3, radius: f64, segments: u32) -> MeshResult<EncodedMesh> {
    check_origin(center)?;
    check_dimension("circle", "radius", radius)?;
    if segments < MIN_SEGMENTS {
        return Err(MeshError::InvalidSegments {
            segments,
            min: MIN_SEGMENTS,
            max: u32::MAX,
        });
    }

    let mut mesh = EncodedMesh::with_capacity(segments as usize + 2, segments as usize);
    let hub = mesh.add_vertex(center);

    for i in 0..=segments {
        let angle = f64::from(i) / f64::from(segments) * TAU;
        mesh.add_vertex(center + DVec3::new(radius * angle.cos(), radius * angle.sin(), 0.0));
    }

    for i in 1..segments {
        mesh.add_triangle(hub, i, i + 1);
    }
    mesh.add_triangle(hub, segments, 1);

    mesh.set_bounds(
        center - DVec3::new(radius, radius, 0.0),
        center + DVec3::new(radius, radius, 0.0),
    );
    mesh.area = std::f64::consts::PI * radius * radius;
    mesh.volume = 0.0;
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_circle_default_segments() {
        let mesh = create_circle(DVec3::ZERO, 1.0, 16).unwrap();
        assert_eq!(mesh.vertex_count(), 18);
        assert_eq!(mesh.triangle_count(), 16);
        assert_relative_eq!(mesh.area, 3.14159, epsilon = 1e-5);
        assert_eq!(mesh.volume, 0.0);
    }

    #[test]
    fn test_circle_closing_face() {
        let mesh = create_circle(DVec3::ZERO, 1.0, 8).unwrap();
        let indices = mesh.triangle_indices();
        assert_eq!(&indices[indices.len() - 3..], &[0, 8, 1]);
    }

    #[test]
    fn test_circle_perimeter_on_radius() {
        let center = DVec3::new(3.0, 3.0, 0.0);
        let mesh = create_circle(center, 2.0, 12).unwrap();
        for i in 1..mesh.vertex_count() {
            let v = mesh.vertex(i).unwrap();
            assert_relative_eq!(v.distance(center), 2.0, epsilon = 1e-9);
        }
        assert_relative_eq!(mesh.vertex(13).unwrap().x, mesh.vertex(1).unwrap().x, epsilon = 1e-9);
    }

    #[test]
    fn test_circle_bounds() {
        let mesh = create_circle(DVec3::new(3.0, 3.0, 1.0), 1.0, 16).unwrap();
        assert_eq!(mesh.bbox_min, [2.0, 2.0, 1.0]);
        assert_eq!(mesh.bbox_max, [4.0, 4.0, 1.0]);
    }

    #[test]
    fn test_circle_too_few_segments() {
        assert!(matches!(
            create_circle(DVec3::ZERO, 1.0, 2),
            Err(MeshError::InvalidSegments { segments: 2, .. })
        ));
    }

    #[test]
    fn test_circle_validates() {
        let mesh = create_circle(DVec3::ZERO, 1.0, 3).unwrap();
        assert!(mesh.validate().is_ok());
    }
}
