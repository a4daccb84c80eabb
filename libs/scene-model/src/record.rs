//! # Geometry Records
//!
//! One [`GeometryRecord`] per user-defined or imported shape. The shape is a
//! closed [`Shape`] variant carrying only the dimensions its kind uses, so a
//! record can never hold a kind the generator does not know.

use crate::color::{ColorInput, Rgb};
use crate::error::{ModelError, ModelResult};
use crate::transform::Transform;
use chrono::Utc;
use config::constants::{DEFAULT_MATERIAL, RECORD_ID_SUFFIX_LEN};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// GEOMETRY KIND
// =============================================================================

/// The four supported primitive kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryKind {
    Triangle,
    Rectangle,
    Cube,
    Circle,
}

impl GeometryKind {
    /// All kinds in declaration order.
    pub const ALL: [GeometryKind; 4] = [
        GeometryKind::Triangle,
        GeometryKind::Rectangle,
        GeometryKind::Cube,
        GeometryKind::Circle,
    ];

    /// Lowercase wire name, as used in CSV rows and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryKind::Triangle => "triangle",
            GeometryKind::Rectangle => "rectangle",
            GeometryKind::Cube => "cube",
            GeometryKind::Circle => "circle",
        }
    }

    /// Capitalized name for display strings.
    pub fn display_name(&self) -> &'static str {
        match self {
            GeometryKind::Triangle => "Triangle",
            GeometryKind::Rectangle => "Rectangle",
            GeometryKind::Cube => "Cube",
            GeometryKind::Circle => "Circle",
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeometryKind {
    type Err = ModelError;

    /// Parses a kind name, ignoring case and surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use scene_model::GeometryKind;
    ///
    /// assert_eq!("Cube".parse::<GeometryKind>().unwrap(), GeometryKind::Cube);
    /// assert!("sphere".parse::<GeometryKind>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        GeometryKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ModelError::unsupported_kind(name))
    }
}

// =============================================================================
// SHAPE
// =============================================================================

/// Kind-specific dimensions.
///
/// Serialized with an internal `type` tag so a record reads as
/// `{"type": "cube", "width": 1, ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    /// Right triangle with legs along +X and +Y.
    Triangle { width: f64, height: f64 },
    /// Axis-aligned rectangle in the XY plane.
    Rectangle { width: f64, height: f64 },
    /// Axis-aligned box.
    Cube { width: f64, height: f64, depth: f64 },
    /// Regular polygon approximation of a circle in the XY plane.
    Circle {
        radius: f64,
        /// Perimeter segment count; `None` uses the configured default.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        segments: Option<u32>,
    },
}

impl Shape {
    pub fn triangle(width: f64, height: f64) -> Self {
        Shape::Triangle { width, height }
    }

    pub fn rectangle(width: f64, height: f64) -> Self {
        Shape::Rectangle { width, height }
    }

    pub fn cube(width: f64, height: f64, depth: f64) -> Self {
        Shape::Cube { width, height, depth }
    }

    pub fn circle(radius: f64) -> Self {
        Shape::Circle { radius, segments: None }
    }

    /// Builds the shape of `kind` from a three-component size.
    ///
    /// Triangle and rectangle read `[width, height]`, cube reads all three,
    /// circle reads the radius from `size[0]`.
    pub fn from_size(kind: GeometryKind, size: [f64; 3]) -> Self {
        let [x, y, z] = size;
        match kind {
            GeometryKind::Triangle => Shape::triangle(x, y),
            GeometryKind::Rectangle => Shape::rectangle(x, y),
            GeometryKind::Cube => Shape::cube(x, y, z),
            GeometryKind::Circle => Shape::circle(x),
        }
    }

    pub fn kind(&self) -> GeometryKind {
        match self {
            Shape::Triangle { .. } => GeometryKind::Triangle,
            Shape::Rectangle { .. } => GeometryKind::Rectangle,
            Shape::Cube { .. } => GeometryKind::Cube,
            Shape::Circle { .. } => GeometryKind::Circle,
        }
    }

    /// Flat size triple; unused components are zero.
    pub fn size(&self) -> [f64; 3] {
        match *self {
            Shape::Triangle { width, height } | Shape::Rectangle { width, height } => {
                [width, height, 0.0]
            }
            Shape::Cube { width, height, depth } => [width, height, depth],
            Shape::Circle { radius, .. } => [radius, 0.0, 0.0],
        }
    }
}

// =============================================================================
// RECORD
// =============================================================================

/// One shape definition prior to mesh generation.
///
/// `id` and the shape are fixed at construction; replace the record to change
/// kind or dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometryRecord {
    id: String,
    #[serde(flatten)]
    shape: Shape,
    pub position: [f64; 3],
    #[serde(default)]
    pub color: Rgb,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform_matrix: Option<Transform>,
}

impl GeometryRecord {
    /// Creates a record with a fresh id and default color.
    pub fn new(shape: Shape, position: [f64; 3]) -> Self {
        Self {
            id: generate_record_id(shape.kind()),
            shape,
            position,
            color: Rgb::default(),
            name: None,
            description: None,
            properties: BTreeMap::new(),
            material: None,
            transform_matrix: None,
        }
    }

    /// Creates a record from an untyped kind name and flat size.
    pub fn from_kind_name(kind: &str, position: [f64; 3], size: [f64; 3]) -> ModelResult<Self> {
        let kind: GeometryKind = kind.parse()?;
        Ok(Self::new(Shape::from_size(kind, size), position))
    }

    pub fn with_color(mut self, color: impl Into<ColorInput>) -> Self {
        self.color = color.into().resolve();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform_matrix = Some(transform);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> GeometryKind {
        self.shape.kind()
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn size(&self) -> [f64; 3] {
        self.shape.size()
    }

    /// Material name, falling back to `"basic"`.
    pub fn material_name(&self) -> &str {
        self.material.as_deref().unwrap_or(DEFAULT_MATERIAL)
    }

    /// Explicit transform or identity.
    pub fn transform(&self) -> Transform {
        self.transform_matrix.unwrap_or_default()
    }
}

// =============================================================================
// HELPERS
// =============================================================================

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates `<kind>-<unix millis>-<base36 suffix>`.
pub fn generate_record_id(kind: GeometryKind) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..RECORD_ID_SUFFIX_LEN)
        .map(|_| char::from(BASE36[rng.gen_range(0..BASE36.len())]))
        .collect();
    format!("{}-{}-{}", kind, Utc::now().timestamp_millis(), suffix)
}

/// Merges scene-level properties with record-level ones; record keys win.
pub fn merge_properties(
    global: &BTreeMap<String, String>,
    local: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut merged = global.clone();
    merged.extend(local.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

#[cfg(test)]
mod tests;
