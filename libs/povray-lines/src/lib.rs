//! # POV-Ray Lines
//!
//! Lines in 3-D rendered as unions of cylinders (with spheres rounding the
//! joins) and cones for arrowheads.
//!
//! ## Architecture
//!
//! ```text
//! points → Polyline (arc length) → stipple (sample positions) → builders → merge node
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use povray_lines::{line, LineOptions};
//!
//! let dashed = LineOptions { stipple: Some(vec![2.0, 2.0]), smooth: false };
//! let node = line(&[DVec3::ZERO, DVec3::new(10.0, 0.0, 0.0)], 0.1, &dashed).unwrap();
//! assert_eq!(node.tag(), "merge");
//! assert_eq!(node.children().len(), 3);
//! ```

pub mod builders;
pub mod error;
pub mod polyline;
pub mod stipple;

pub use builders::{arrowed_line, line, ArrowStyle, LineOptions};
pub use error::LineError;
pub use polyline::Polyline;
pub use stipple::{sample_positions, stipple, stipple_points, Boundary};
