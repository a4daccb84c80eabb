//! # Scene Mesh
//!
//! Browser-safe mesh generation for sandbox geometry records.
//! Converts a [`GeometryRecord`](scene_model::GeometryRecord) into an
//! [`EncodedMesh`]: flat vertex, face and color arrays plus bounds, area and
//! volume.
//!
//! ## Architecture
//!
//! ```text
//! scene-model (GeometryRecord) → scene-mesh (EncodedMesh) → faces::decode_faces → index buffer
//! ```
//!
//! ## Face Encoding
//!
//! Faces are a flat, self-describing sequence. Each face starts with a tag:
//! `0` means "triangle, three indices follow", any other value `n` is an
//! n-gon with `n` indices. Only triangles are ever produced here; n-gons in
//! foreign data are skipped by the decoder, not triangulated.
//!
//! ## Usage
//!
//! ```rust
//! use scene_mesh::{faces::decode_faces, PrimitiveGenerator};
//! use scene_model::{GeometryRecord, Shape};
//!
//! let generator = PrimitiveGenerator::default();
//! let record = GeometryRecord::new(Shape::rectangle(2.0, 3.0), [0.0; 3]);
//! let mesh = generator.encode(&record).unwrap();
//! assert_eq!(decode_faces(&mesh.faces), vec![0, 1, 2, 0, 2, 3]);
//! ```

pub mod error;
pub mod faces;
pub mod generator;
pub mod mesh;
pub mod primitives;

pub use error::{MeshError, MeshResult};
pub use generator::{GeneratedGeometry, GenerationReport, PrimitiveGenerator, SkippedRecord};
pub use mesh::EncodedMesh;
