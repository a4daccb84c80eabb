//! Row-major 4x4 transforms attached to records.
//!
//! The transform is stored next to the generated mesh and applied by the
//! render step; vertex coordinates are never baked.

use crate::error::{ModelError, ModelResult};
use config::constants::{approx_equal, IDENTITY_TRANSFORM};
use glam::DMat4;
use serde::{Deserialize, Serialize};

/// A 4x4 matrix in row-major order.
///
/// # Examples
/// ```
/// use scene_model::Transform;
///
/// let t = Transform::translation(1.0, 2.0, 3.0);
/// let m = t.to_dmat4();
/// assert_eq!(m.transform_point3(glam::DVec3::ZERO), glam::DVec3::new(1.0, 2.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transform([f64; 16]);

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Transform = Transform(IDENTITY_TRANSFORM);

    /// Wraps a row-major array.
    pub const fn from_row_major(values: [f64; 16]) -> Self {
        Self(values)
    }

    /// Builds a transform from a slice, which must hold exactly 16 values.
    pub fn from_slice(values: &[f64]) -> ModelResult<Self> {
        let values: [f64; 16] = values
            .try_into()
            .map_err(|_| ModelError::InvalidTransform { len: values.len() })?;
        Ok(Self(values))
    }

    /// Pure translation.
    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        let mut values = IDENTITY_TRANSFORM;
        values[3] = x;
        values[7] = y;
        values[11] = z;
        Self(values)
    }

    /// Converts to a glam matrix. glam is column-major, so the row-major
    /// array read as columns is the transpose.
    pub fn to_dmat4(&self) -> DMat4 {
        DMat4::from_cols_array(&self.0).transpose()
    }

    /// True if every component is within `EPSILON` of the identity matrix.
    pub fn is_identity(&self) -> bool {
        self.0
            .iter()
            .zip(IDENTITY_TRANSFORM)
            .all(|(&a, b)| approx_equal(a, b))
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
