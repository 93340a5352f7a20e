//! # Configuration Constants
//!
//! Centralized constants for the POV-Ray scene pipeline. Output formatting,
//! geometry tolerances, recursion guards and scene presets are defined here.
//!
//! ## Categories
//!
//! - **Formatting**: Indentation of the emitted scene text
//! - **Precision**: Floating-point comparison tolerances
//! - **Limits**: Stack growth parameters for deep node trees
//! - **Scene**: Defaults for the document header and global settings
//! - **Molecules**: Defaults for the ball-and-stick preset

use std::fmt;

// =============================================================================
// FORMATTING CONSTANTS
// =============================================================================

/// Indentation emitted once per nesting level.
///
/// # Example
///
/// ```rust
/// use config::constants::INDENT_UNIT;
///
/// assert_eq!(INDENT_UNIT.len(), 2);
/// ```
pub const INDENT_UNIT: &str = "  ";

/// Returns the indentation prefix for a nesting depth.
///
/// Depths below zero (the scene document sits at -1) produce no indentation.
///
/// # Example
///
/// ```rust
/// use config::constants::indent;
///
/// assert_eq!(indent(-1), "");
/// assert_eq!(indent(0), "");
/// assert_eq!(indent(3), "      ");
/// ```
pub fn indent(depth: i32) -> String {
    INDENT_UNIT.repeat(depth.max(0) as usize)
}

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

/// Slack added to bond thresholds so that particles sitting exactly one
/// diameter apart are still considered bonded.
pub const BOND_EPSILON: f64 = 1e-12;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Remaining stack below which the serializer grows a new stack segment.
pub const STACKER_RED_ZONE_BYTES: usize = 64 * 1024;

/// Size of each stack segment allocated by `stacker` while serializing
/// deeply nested node trees.
///
/// # Example
///
/// ```rust
/// use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
///
/// assert!(STACKER_STACK_SIZE_BYTES > STACKER_RED_ZONE_BYTES);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 8 * 1024 * 1024;

/// Upper bound on the sample positions one stippling pass may generate.
///
/// A pattern whose period is tiny relative to the path would otherwise
/// allocate without limit.
pub const MAX_STIPPLE_SAMPLES: usize = 1_000_000;

// =============================================================================
// SCENE CONSTANTS
// =============================================================================

/// Language version written in the `#version` directive.
pub const DEFAULT_POV_VERSION: f64 = 3.7;

/// Display gamma written to `global_settings`.
pub const DEFAULT_ASSUMED_GAMMA: f64 = 2.2;

/// Ray recursion limit written to `global_settings`.
///
/// POV-Ray accepts values between 1 and 256.
pub const DEFAULT_MAX_TRACE_LEVEL: u32 = 256;

/// Upper bound accepted by POV-Ray for `max_trace_level`.
pub const MAX_TRACE_LEVEL_LIMIT: u32 = 256;

/// Ambient light colour written to `global_settings`.
pub const DEFAULT_AMBIENT_LIGHT: &str = "White";

/// Include files every generated scene pulls in.
///
/// `colors.inc` provides the symbolic colour names used by the presets.
pub const DEFAULT_INCLUDES: [&str; 2] = ["shapes.inc", "colors.inc"];

// =============================================================================
// MOLECULE CONSTANTS
// =============================================================================

/// Particle diameter assumed when detecting bonds.
pub const DEFAULT_DIAMETER: f64 = 1.0;

/// Pairs of particles closer than this are bonded.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_BOND_THRESHOLD, DEFAULT_DIAMETER};
///
/// assert!(DEFAULT_DIAMETER < DEFAULT_BOND_THRESHOLD);
/// ```
pub const DEFAULT_BOND_THRESHOLD: f64 = DEFAULT_DIAMETER + BOND_EPSILON;

/// Radius of the spheres drawn for particles.
pub const DEFAULT_BALL_RADIUS: f64 = 0.5;

/// Radius of the cylinders drawn for bonds.
pub const DEFAULT_STICK_RADIUS: f64 = 0.05;

/// Camera distance in units of the largest particle distance from the origin.
pub const DEFAULT_CAMERA_DISTANCE: f64 = 4.0;

/// Transmit value applied to the particle pigment.
pub const DEFAULT_BALL_ALPHA: f64 = 0.8;

/// Particle colour.
pub const DEFAULT_BALL_COLOUR: &str = "White";

/// Bond colour.
pub const DEFAULT_STICK_COLOUR: &str = "Yellow";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

// =============================================================================
// SCENE CONFIGURATION
// =============================================================================

/// Immutable snapshot of the settings written into a scene document header.
///
/// # Examples
/// ```
/// use config::constants::SceneConfig;
/// let config = SceneConfig::default();
/// assert_eq!(config.max_trace_level, 256);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Value of the `#version` directive.
    pub version: f64,
    /// `assumed_gamma` in `global_settings`.
    pub assumed_gamma: f64,
    /// `max_trace_level` in `global_settings`.
    pub max_trace_level: u32,
    /// `ambient_light` in `global_settings`, usually a colour identifier.
    pub ambient_light: String,
    /// Files pulled in with `#include`, in order.
    pub includes: Vec<String>,
}

impl SceneConfig {
    /// Builds a configuration enforcing strict validation of every value.
    ///
    /// # Examples
    /// ```
    /// use config::constants::SceneConfig;
    /// let cfg = SceneConfig::new(3.7, 1.0, 12, "Black").expect("valid config");
    /// assert_eq!(cfg.max_trace_level, 12);
    /// assert!(SceneConfig::new(3.7, 1.0, 0, "Black").is_err());
    /// ```
    pub fn new(
        version: f64,
        assumed_gamma: f64,
        max_trace_level: u32,
        ambient_light: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            version,
            assumed_gamma,
            max_trace_level,
            ambient_light: ambient_light.into(),
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Replaces the include list.
    pub fn with_includes<I, S>(mut self, includes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.includes = includes.into_iter().map(Into::into).collect();
        self
    }

    /// Checks every field against the ranges POV-Ray accepts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.version.is_finite() && self.version > 0.0) {
            return Err(ConfigError::InvalidVersion(self.version));
        }
        if !(self.assumed_gamma.is_finite() && self.assumed_gamma > 0.0) {
            return Err(ConfigError::InvalidGamma(self.assumed_gamma));
        }
        if self.max_trace_level == 0 || self.max_trace_level > MAX_TRACE_LEVEL_LIMIT {
            return Err(ConfigError::InvalidTraceLevel(self.max_trace_level));
        }
        if self.ambient_light.trim().is_empty() {
            return Err(ConfigError::EmptyAmbientLight);
        }
        Ok(())
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_POV_VERSION,
            assumed_gamma: DEFAULT_ASSUMED_GAMMA,
            max_trace_level: DEFAULT_MAX_TRACE_LEVEL,
            ambient_light: DEFAULT_AMBIENT_LIGHT.to_string(),
            includes: DEFAULT_INCLUDES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when the language version is not a positive number.
    InvalidVersion(f64),
    /// Raised when gamma is zero, negative or not finite.
    InvalidGamma(f64),
    /// Raised when the trace level is outside `1..=256`.
    InvalidTraceLevel(u32),
    /// Raised when no ambient light is named.
    EmptyAmbientLight,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidVersion(value) => {
                write!(f, "version must be positive: {value}")
            }
            ConfigError::InvalidGamma(value) => {
                write!(f, "assumed_gamma must be positive: {value}")
            }
            ConfigError::InvalidTraceLevel(value) => {
                write!(f, "max_trace_level must be within 1..={MAX_TRACE_LEVEL_LIMIT}: {value}")
            }
            ConfigError::EmptyAmbientLight => write!(f, "ambient_light must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}
