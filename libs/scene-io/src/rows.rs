//! # Row Codec
//!
//! CSV rows ↔ [`GeometryRecord`]s.
//!
//! Decoding is lenient: short rows and unknown kinds are skipped with a
//! warning, unparseable numbers fall back to defaults, and unrecognized
//! colors fall back to red. Only a payload with no usable rows fails.

use crate::error::{ImportError, ImportResult};
use chrono::Utc;
use config::constants::{
    CSV_FIELD_COUNT, CSV_HEADER, DEFAULT_POSITION_COMPONENT, DEFAULT_SIZE_COMPONENT,
};
use scene_model::{ColorInput, GeometryKind, GeometryRecord, ModelError, Shape};

// =============================================================================
// FIELD SPLITTING
// =============================================================================

/// Splits one line into trimmed fields.
///
/// A `"` toggles the quoted state and is not kept. Commas inside quotes are
/// part of the field.
///
/// # Example
///
/// ```rust
/// use scene_io::split_fields;
///
/// assert_eq!(split_fields(r#" "Cube, big" ,cube"#), vec!["Cube, big", "cube"]);
/// ```
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

// =============================================================================
// DECODE
// =============================================================================

/// Records decoded from a payload plus the rows that were skipped.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub records: Vec<GeometryRecord>,
    /// One [`ImportError::MalformedImportRow`] per skipped row
    pub warnings: Vec<ImportError>,
}

/// Decodes a CSV payload. The first non-blank line is the header.
///
/// Line numbers in warnings and default names are 1-based positions in
/// `text`, counting every line including blank ones. Blank lines are
/// otherwise ignored.
///
/// # Errors
///
/// [`ImportError::EmptyImportPayload`] when no row produced a record.
///
/// # Example
///
/// ```rust
/// use scene_io::decode_rows;
///
/// let csv = "name,type,position_x,position_y,position_z,size_x,size_y,size_z,color\n\
///            Box,cube,0,3,0,1,1,1,#0000ff";
/// let report = decode_rows(csv).unwrap();
/// assert_eq!(report.records.len(), 1);
/// assert_eq!(report.records[0].name.as_deref(), Some("Box"));
/// ```
pub fn decode_rows(text: &str) -> ImportResult<ImportReport> {
    let timestamp = Utc::now().timestamp_millis().to_string();
    let mut report = ImportReport::default();

    let mut lines = text
        .lines()
        .enumerate()
        .skip_while(|(_, line)| line.trim().is_empty());
    let _header = lines.next();

    for (index, line) in lines {
        let line_number = index + 1;
        if line.trim().is_empty() {
            continue;
        }
        match decode_row(line_number, line, &timestamp) {
            Ok(record) => report.records.push(record),
            Err(err) => {
                log::warn!("skipping CSV row: {err}");
                report.warnings.push(err);
            }
        }
    }

    if report.records.is_empty() {
        return Err(ImportError::EmptyImportPayload);
    }

    log::info!(
        "decoded {} records from CSV ({} rows skipped)",
        report.records.len(),
        report.warnings.len()
    );
    Ok(report)
}

fn decode_row(line_number: usize, line: &str, timestamp: &str) -> ImportResult<GeometryRecord> {
    let fields = split_fields(line);
    if fields.len() < CSV_FIELD_COUNT {
        return Err(ImportError::malformed(
            line_number,
            format!("expected {} fields, found {}", CSV_FIELD_COUNT, fields.len()),
        ));
    }

    let kind: GeometryKind = fields[1]
        .parse()
        .map_err(|err: ModelError| ImportError::malformed(line_number, err.to_string()))?;

    let position = [
        number_or(&fields[2], DEFAULT_POSITION_COMPONENT),
        number_or(&fields[3], DEFAULT_POSITION_COMPONENT),
        number_or(&fields[4], DEFAULT_POSITION_COMPONENT),
    ];
    let size = [
        number_or(&fields[5], DEFAULT_SIZE_COMPONENT),
        number_or(&fields[6], DEFAULT_SIZE_COMPONENT),
        number_or(&fields[7], DEFAULT_SIZE_COMPONENT),
    ];

    let name = match fields[0].as_str() {
        "" => format!("Imported {kind} {line_number}"),
        name => name.to_string(),
    };

    Ok(GeometryRecord::new(Shape::from_size(kind, size), position)
        .with_color(ColorInput::Hex(fields[8].clone()))
        .with_name(name)
        .with_description(format!("Imported from CSV ({kind})"))
        .with_property("source", "csv_import")
        .with_property("timestamp", timestamp))
}

/// Parses a float, returning `default` when the field is not a finite number.
fn number_or(field: &str, default: f64) -> f64 {
    match field.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => default,
    }
}

// =============================================================================
// ENCODE
// =============================================================================

/// Encodes one record as a CSV row (no trailing newline).
///
/// Names containing a comma are quoted; quote characters are dropped since
/// the format has no escape.
pub fn encode_row(record: &GeometryRecord) -> String {
    let name: String = record
        .name
        .as_deref()
        .unwrap_or_default()
        .chars()
        .filter(|&c| c != '"')
        .collect();
    let name = if name.contains(',') {
        format!("\"{name}\"")
    } else {
        name
    };

    let [px, py, pz] = record.position;
    let [sx, sy, sz] = record.size();
    format!(
        "{name},{kind},{px},{py},{pz},{sx},{sy},{sz},{color}",
        kind = record.kind(),
        color = record.color.to_hex()
    )
}

/// Encodes records as a CSV document with a header line.
///
/// # Example
///
/// ```rust
/// use scene_io::{decode_rows, encode_rows};
/// use scene_model::SceneConfig;
///
/// let scene = SceneConfig::example();
/// let csv = encode_rows(&scene.geometries);
/// assert_eq!(decode_rows(&csv).unwrap().records.len(), 4);
/// ```
pub fn encode_rows(records: &[GeometryRecord]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for record in records {
        out.push_str(&encode_row(record));
        out.push('\n');
    }
    out
}
