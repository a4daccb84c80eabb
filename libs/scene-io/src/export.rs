//! JSON export snapshot.
//!
//! One-way: nothing in the pipeline reads the snapshot back.

use crate::error::ImportResult;
use chrono::{DateTime, SecondsFormat, Utc};
use config::constants::EXPORT_FORMAT_VERSION;
use scene_model::{GeometryRecord, SceneConfig};
use serde::Serialize;

/// The exported document: `{scene, geometries, exportTime, version}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSnapshot<'a> {
    pub scene: &'a SceneConfig,
    pub geometries: &'a [GeometryRecord],
    /// ISO-8601 UTC with millisecond precision
    pub export_time: String,
    pub version: &'static str,
}

impl<'a> ExportSnapshot<'a> {
    /// Snapshot of `scene` stamped with `time`.
    pub fn at(scene: &'a SceneConfig, time: DateTime<Utc>) -> Self {
        Self {
            scene,
            geometries: &scene.geometries,
            export_time: time.to_rfc3339_opts(SecondsFormat::Millis, true),
            version: EXPORT_FORMAT_VERSION,
        }
    }

    /// Snapshot of `scene` stamped now.
    pub fn new(scene: &'a SceneConfig) -> Self {
        Self::at(scene, Utc::now())
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> ImportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Serializes `scene` to a pretty-printed JSON snapshot stamped now.
pub fn export_json(scene: &SceneConfig) -> ImportResult<String> {
    if scene.geometries.is_empty() {
        log::warn!("exporting scene '{}' with no geometries", scene.name);
    }
    ExportSnapshot::new(scene).to_json()
}

/// Download file name for a snapshot taken at `time`,
/// e.g. `geometry_data_2024-05-01T12-30-00.json`.
pub fn export_file_name(time: DateTime<Utc>) -> String {
    format!("geometry_data_{}.json", time.format("%Y-%m-%dT%H-%M-%S"))
}
