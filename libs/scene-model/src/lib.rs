//! # Scene Model
//!
//! Typed geometry records consumed by the mesh generator, the row codec and
//! the scene synchronizer.
//!
//! ## Architecture
//!
//! ```text
//! row codec / UI input → GeometryRecord → SceneConfig (ordered records)
//! ```
//!
//! A [`GeometryRecord`] carries exactly one closed [`Shape`] variant. Kind
//! names coming from untyped input are resolved through
//! [`GeometryKind::from_str`](std::str::FromStr), which is the single place an
//! unsupported kind is reported.
//!
//! ## Usage
//!
//! ```rust
//! use scene_model::{GeometryRecord, Shape, ColorInput};
//!
//! let record = GeometryRecord::new(Shape::cube(1.0, 1.0, 1.0), [0.0, 3.0, 0.0])
//!     .with_color(ColorInput::from("#0000ff"))
//!     .with_name("Blue Cube");
//! assert_eq!(record.color.channels(), [0, 0, 255]);
//! ```

pub mod color;
pub mod error;
pub mod record;
pub mod scene;
pub mod transform;

pub use color::{ColorInput, Rgb};
pub use error::{ModelError, ModelResult};
pub use record::{generate_record_id, merge_properties, GeometryKind, GeometryRecord, Shape};
pub use scene::SceneConfig;
pub use transform::Transform;
