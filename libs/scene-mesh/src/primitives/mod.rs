//! # Primitives
//!
//! Mesh generation for the four sandbox primitives. Each builder places the
//! shape at `origin`, computes area and volume, and leaves color and
//! transform to the generator.

pub mod circle;
pub mod cube;
pub mod rectangle;
pub mod triangle;

pub use circle::create_circle;
pub use cube::create_cube;
pub use rectangle::create_rectangle;
pub use triangle::create_triangle;

use crate::error::{MeshError, MeshResult};
use glam::DVec3;

/// Rejects non-finite or negative dimensions.
pub(crate) fn check_dimension(shape: &str, name: &str, value: f64) -> MeshResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(MeshError::degenerate(format!(
            "{shape} {name} must be a finite non-negative number, got {value}"
        )));
    }
    Ok(())
}

/// Rejects a non-finite origin.
pub(crate) fn check_origin(origin: DVec3) -> MeshResult<()> {
    if !origin.is_finite() {
        return Err(MeshError::degenerate(format!("position must be finite, got {origin}")));
    }
    Ok(())
}
