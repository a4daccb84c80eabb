//! WASM-facing entry points for the geometry sandbox.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. The browser host owns one [`SceneSession`], mutates it
//! through the panel UI, calls `sync()` and then pulls one [`MeshHandle`] per
//! primitive to feed its renderer.
//!
//! Native tests use the `*_internal` methods, which return Rust errors
//! instead of JavaScript values.
//!
//! ```
//! let session = scene_wasm::SceneSession::example();
//! assert_eq!(session.sync_internal().unwrap(), 4);
//! ```

use config::constants::DEFAULT_SEGMENTS;
use wasm_bindgen::prelude::*;

mod error;
mod mesh_handle;
mod session;

pub use error::SessionError;
pub use mesh_handle::MeshHandle;
pub use session::{ImportSummary, SceneSession};

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "scene-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Default circle segment count, for prefilling the panel form.
///
/// # Examples
/// ```
/// assert_eq!(scene_wasm::default_segments(), 16);
/// ```
#[wasm_bindgen]
pub fn default_segments() -> u32 {
    DEFAULT_SEGMENTS
}
