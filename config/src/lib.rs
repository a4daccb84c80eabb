//! # Config Crate
//!
//! Centralized configuration constants for the geometry sandbox pipeline.
//! Every default the generator, the row codec and the exporter fall back to
//! is defined here so the crates never disagree on a literal.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GlobalConfig, DEFAULT_COLOR, DEFAULT_SEGMENTS};
//!
//! let config = GlobalConfig::default();
//! assert_eq!(config.default_segments, DEFAULT_SEGMENTS);
//! assert_eq!(DEFAULT_COLOR, [255, 0, 0]);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Explicit**: Configuration is passed by value, never read from globals

pub mod constants;
