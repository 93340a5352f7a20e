//! # Config Crate
//!
//! Centralized configuration constants for the POV-Ray scene pipeline.
//! All magic numbers and tunable parameters are defined here so the node
//! serializer, the geometry kernels and the scene presets agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{indent, EPSILON, INDENT_UNIT};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! // Two nesting levels of POV-Ray output
//! assert_eq!(indent(2), format!("{INDENT_UNIT}{INDENT_UNIT}"));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **POV-Ray Compatible**: Scene defaults match a stock POV-Ray 3.7 setup
//! - **Validated Snapshots**: `SceneConfig` can only be built from sane values

pub mod constants;

#[cfg(test)]
mod tests;
