//! # Scene IO
//!
//! Bulk import and export for the geometry store.
//!
//! ## Architecture
//!
//! ```text
//! CSV text ──rows::decode_rows──► ImportReport (records + skipped-row warnings)
//! records  ──rows::encode_rows──► CSV text
//! scene    ──export::export_json─► JSON snapshot (one-way)
//! ```
//!
//! ## Row Format
//!
//! ```text
//! name,type,position_x,position_y,position_z,size_x,size_y,size_z,color
//! Red Triangle,triangle,0,0,0,2,2,0,#ff0000
//! ```
//!
//! The first line is a header and is never parsed. Double quotes toggle a
//! "no split" state and are dropped; there is no escape sequence.

pub mod error;
pub mod export;
pub mod rows;

pub use error::{ImportError, ImportResult};
pub use export::{export_file_name, export_json, ExportSnapshot};
pub use rows::{decode_rows, encode_row, encode_rows, split_fields, ImportReport};
