//! # Configuration Constants
//!
//! Centralized constants for the geometry sandbox. Tessellation defaults,
//! fallback values for lenient input parsing, and export format identifiers
//! are all defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Circle tessellation bounds
//! - **Defaults**: Values substituted for missing or unparsable input
//! - **Formats**: Row layout and export snapshot identifiers

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Returns true if `a` and `b` differ by less than [`EPSILON`].
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
/// assert!(approx_equal(0.1 + 0.2, 0.3));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default number of perimeter segments for circle primitives.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SEGMENTS;
/// assert_eq!(DEFAULT_SEGMENTS, 16);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 16;

/// Smallest segment count that still encloses an area.
///
/// # Examples
/// ```
/// use config::constants::MIN_SEGMENTS;
/// assert_eq!(MIN_SEGMENTS, 3);
/// ```
pub const MIN_SEGMENTS: u32 = 3;

/// Upper bound on circle segments accepted by the generator.
///
/// Keeps a single malformed record from producing an unbounded vertex buffer.
///
/// # Examples
/// ```
/// use config::constants::{MAX_SEGMENTS, DEFAULT_SEGMENTS};
/// assert!(MAX_SEGMENTS > DEFAULT_SEGMENTS);
/// ```
pub const MAX_SEGMENTS: u32 = 1024;

// =============================================================================
// DEFAULT VALUES
// =============================================================================

/// Color used when a color input is neither `#RRGGBB` nor a valid RGB triple.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_COLOR;
/// assert_eq!(DEFAULT_COLOR, [255, 0, 0]);
/// ```
pub const DEFAULT_COLOR: [u8; 3] = [255, 0, 0];

/// Row-major 4x4 identity matrix applied when a record carries no transform.
///
/// # Examples
/// ```
/// use config::constants::IDENTITY_TRANSFORM;
/// assert_eq!(IDENTITY_TRANSFORM[0], 1.0);
/// assert_eq!(IDENTITY_TRANSFORM[5], 1.0);
/// assert_eq!(IDENTITY_TRANSFORM[1], 0.0);
/// ```
pub const IDENTITY_TRANSFORM: [f64; 16] = [
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 1.0,
];

/// Length unit written into every encoded mesh.
pub const DEFAULT_UNITS: &str = "m";

/// Material name used when a record does not name one.
pub const DEFAULT_MATERIAL: &str = "basic";

/// Position component substituted for an unparsable numeric field.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_POSITION_COMPONENT;
/// let x = "abc".parse::<f64>().unwrap_or(DEFAULT_POSITION_COMPONENT);
/// assert_eq!(x, 0.0);
/// ```
pub const DEFAULT_POSITION_COMPONENT: f64 = 0.0;

/// Size component substituted for an unparsable numeric field.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SIZE_COMPONENT;
/// let w = "".parse::<f64>().unwrap_or(DEFAULT_SIZE_COMPONENT);
/// assert_eq!(w, 1.0);
/// ```
pub const DEFAULT_SIZE_COMPONENT: f64 = 1.0;

/// Number of random base-36 characters appended to generated record ids.
pub const RECORD_ID_SUFFIX_LEN: usize = 9;

// =============================================================================
// FORMAT CONSTANTS
// =============================================================================

/// Number of comma-separated fields in a bulk import row.
pub const CSV_FIELD_COUNT: usize = 9;

/// Header line written by the row encoder.
///
/// # Examples
/// ```
/// use config::constants::{CSV_HEADER, CSV_FIELD_COUNT};
/// assert_eq!(CSV_HEADER.split(',').count(), CSV_FIELD_COUNT);
/// ```
pub const CSV_HEADER: &str =
    "name,type,position_x,position_y,position_z,size_x,size_y,size_z,color";

/// Version string stamped into JSON export snapshots.
///
/// # Examples
/// ```
/// use config::constants::EXPORT_FORMAT_VERSION;
/// assert_eq!(EXPORT_FORMAT_VERSION, "1.0");
/// ```
pub const EXPORT_FORMAT_VERSION: &str = "1.0";

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of generator settings shared between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.default_segments >= 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalConfig {
    /// Segment count for circles that do not override it.
    pub default_segments: u32,
    /// Largest segment count the generator accepts.
    pub max_segments: u32,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// segment bounds.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(24, 256).expect("valid config");
    /// assert_eq!(cfg.default_segments, 24);
    /// assert!(GlobalConfig::new(2, 256).is_err());
    /// assert!(GlobalConfig::new(16, u32::MAX).is_err());
    /// ```
    pub fn new(default_segments: u32, max_segments: u32) -> Result<Self, ConfigError> {
        if default_segments < MIN_SEGMENTS {
            return Err(ConfigError::InvalidSegments(default_segments));
        }
        if max_segments > MAX_SEGMENTS {
            return Err(ConfigError::SegmentLimitExceeded(max_segments));
        }
        if max_segments < default_segments {
            return Err(ConfigError::SegmentBoundsInverted {
                default_segments,
                max_segments,
            });
        }
        Ok(Self {
            default_segments,
            max_segments,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            default_segments: DEFAULT_SEGMENTS,
            max_segments: MAX_SEGMENTS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the requested segment count is too small to form a polygon.
    InvalidSegments(u32),
    /// Raised when the default segment count exceeds the maximum.
    SegmentBoundsInverted { default_segments: u32, max_segments: u32 },
    /// Raised when the maximum is above [`MAX_SEGMENTS`].
    SegmentLimitExceeded(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSegments(value) => {
                write!(f, "default_segments must be >= {MIN_SEGMENTS}: {value}")
            }
            ConfigError::SegmentBoundsInverted {
                default_segments,
                max_segments,
            } => write!(
                f,
                "default_segments ({default_segments}) exceeds max_segments ({max_segments})"
            ),
            ConfigError::SegmentLimitExceeded(value) => {
                write!(f, "max_segments must be <= {MAX_SEGMENTS}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
