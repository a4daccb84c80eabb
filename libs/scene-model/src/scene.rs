//! Scene envelope: metadata plus the ordered record list.

use crate::color::Rgb;
use crate::record::{GeometryRecord, Shape};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scene metadata and its geometry records in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub global_properties: BTreeMap<String, String>,
    #[serde(default)]
    pub geometries: Vec<GeometryRecord>,
}

impl SceneConfig {
    /// Creates an empty scene.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            global_properties: BTreeMap::new(),
            geometries: Vec::new(),
        }
    }

    /// The four-shape demo scene shown on first load.
    ///
    /// # Examples
    ///
    /// ```
    /// use scene_model::{GeometryKind, SceneConfig};
    ///
    /// let scene = SceneConfig::example();
    /// let kinds: Vec<_> = scene.geometries.iter().map(|g| g.kind()).collect();
    /// assert_eq!(kinds, GeometryKind::ALL);
    /// ```
    pub fn example() -> Self {
        Self {
            name: "Default Example Scene".to_string(),
            description: Some("A scene with various geometric shapes".to_string()),
            global_properties: BTreeMap::from([
                ("type".to_string(), "example".to_string()),
                ("version".to_string(), "1.0".to_string()),
            ]),
            geometries: vec![
                example_record(Shape::triangle(2.0, 2.0), [0.0, 0.0, 0.0], "Red Triangle")
                    .with_color(Rgb::new(255, 0, 0))
                    .with_property("priority", "high"),
                example_record(Shape::rectangle(1.5, 1.0), [3.0, 0.0, 0.0], "Green Rectangle")
                    .with_color(Rgb::new(0, 255, 0))
                    .with_property("priority", "medium"),
                example_record(Shape::cube(1.0, 1.0, 1.0), [0.0, 3.0, 0.0], "Blue Cube")
                    .with_color(Rgb::new(0, 0, 255))
                    .with_property("priority", "low"),
                example_record(Shape::circle(1.0), [3.0, 3.0, 0.0], "Yellow Circle")
                    .with_color(Rgb::new(255, 255, 0))
                    .with_property("priority", "medium"),
            ],
        }
    }
}

fn example_record(shape: Shape, position: [f64; 3], name: &str) -> GeometryRecord {
    GeometryRecord::new(shape, position)
        .with_name(name)
        .with_description(format!("Example {}", name.to_lowercase()))
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::new("Untitled Scene")
    }
}
