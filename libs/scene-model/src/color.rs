//! # Colors
//!
//! Flat RGB colors and the lenient color input accepted from the UI and the
//! row codec.

use crate::error::{ModelError, ModelResult};
use config::constants::DEFAULT_COLOR;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An RGB color with 8-bit channels.
///
/// # Example
///
/// ```rust
/// use scene_model::Rgb;
///
/// let c = Rgb::from_hex("#FF8000").unwrap();
/// assert_eq!(c.channels(), [255, 128, 0]);
/// assert_eq!(c.to_hex(), "#ff8000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb([u8; 3]);

impl Rgb {
    /// Creates a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Parses `#RRGGBB`. Anything else returns `None`.
    pub fn from_hex(input: &str) -> Option<Self> {
        let hex = input.strip_prefix('#')?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Self([channel(0..2)?, channel(2..4)?, channel(4..6)?]))
    }

    /// Builds a color from integer channels, rejecting values outside 0–255.
    pub fn from_channels(channels: &[i64]) -> Option<Self> {
        match channels {
            [r, g, b] => Some(Self([
                u8::try_from(*r).ok()?,
                u8::try_from(*g).ok()?,
                u8::try_from(*b).ok()?,
            ])),
            _ => None,
        }
    }

    /// Returns the raw channels.
    #[inline]
    pub fn channels(&self) -> [u8; 3] {
        self.0
    }

    /// Formats as lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.0;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self(DEFAULT_COLOR)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(channels: [u8; 3]) -> Self {
        Self(channels)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Color as supplied by a caller: a hex string or a channel triple.
///
/// Resolution never fails; unrecognized input falls back to
/// [`DEFAULT_COLOR`].
///
/// # Example
///
/// ```rust
/// use scene_model::{ColorInput, Rgb};
///
/// assert_eq!(ColorInput::from("#00ff00").resolve(), Rgb::new(0, 255, 0));
/// assert_eq!(ColorInput::Channels(vec![0, 0, 255]).resolve(), Rgb::new(0, 0, 255));
/// assert_eq!(ColorInput::from("green").resolve(), Rgb::new(255, 0, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    Hex(String),
    Channels(Vec<i64>),
}

impl ColorInput {
    /// Resolves the input strictly.
    pub fn try_resolve(&self) -> ModelResult<Rgb> {
        match self {
            ColorInput::Hex(hex) => {
                Rgb::from_hex(hex).ok_or_else(|| ModelError::invalid_color(hex.as_str()))
            }
            ColorInput::Channels(channels) => Rgb::from_channels(channels)
                .ok_or_else(|| ModelError::invalid_color(format!("{channels:?}"))),
        }
    }

    /// Resolves the input to a concrete color, defaulting to red.
    pub fn resolve(&self) -> Rgb {
        self.try_resolve().unwrap_or_else(|err| {
            log::debug!("{err}, using default color");
            Rgb::default()
        })
    }
}

impl From<&str> for ColorInput {
    fn from(hex: &str) -> Self {
        ColorInput::Hex(hex.to_string())
    }
}

impl From<Rgb> for ColorInput {
    fn from(color: Rgb) -> Self {
        ColorInput::Channels(color.channels().iter().map(|&c| i64::from(c)).collect())
    }
}
