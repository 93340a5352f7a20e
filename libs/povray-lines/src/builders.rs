//! # Line Builders
//!
//! POV-Ray has no line primitive, so lines are assembled from cylinders
//! between consecutive points. Spheres of the same radius round off the
//! joins, and cones stand in for the line where arrowheads are placed.
//! Everything is wrapped in a `merge` so overlapping pieces render as one
//! surface under transparency.

use crate::error::LineError;
use crate::polyline::Polyline;
use crate::stipple::{sample_positions, stipple, Boundary};
use glam::DVec3;
use povray_ast::catalog::{cone, cylinder, merge, sphere};
use povray_ast::Node;
use std::collections::HashSet;

// =============================================================================
// OPTIONS
// =============================================================================

/// How a plain line is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct LineOptions {
    /// Repeating on/off lengths; `None` draws a solid line.
    pub stipple: Option<Vec<f64>>,
    /// Put a sphere on every joint.
    pub smooth: bool,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            stipple: None,
            smooth: true,
        }
    }
}

/// Arrowhead placement along a line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowStyle {
    /// Arc length before the first arrowhead and between consecutive ones.
    pub separation: f64,
    /// Arc length covered by each arrowhead.
    pub length: f64,
    /// Base radius of the arrowhead cones.
    pub width: f64,
    /// Point the arrowheads towards the start of the line.
    pub reverse: bool,
}

impl ArrowStyle {
    pub fn new(separation: f64, length: f64, width: f64) -> Self {
        Self {
            separation,
            length,
            width,
            reverse: false,
        }
    }

    pub fn reversed(mut self) -> Self {
        self.reverse = !self.reverse;
        self
    }
}

// =============================================================================
// BUILDERS
// =============================================================================

/// A line of cylinders through `points`.
///
/// With a stipple pattern the path is resampled with [`Boundary::Clamp`] and
/// consecutive sample pairs become the dashes; a trailing unpaired sample is
/// dropped and gets no joint either. Zero-length pieces are skipped.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use povray_lines::{line, LineOptions};
///
/// let node = line(&[DVec3::ZERO, DVec3::X, DVec3::Y], 0.05, &LineOptions::default()).unwrap();
/// // Two cylinders and three joint spheres.
/// assert_eq!(node.children().len(), 5);
/// ```
pub fn line(points: &[DVec3], radius: f64, options: &LineOptions) -> Result<Node, LineError> {
    check_radius(radius)?;
    let path = Polyline::new(points.to_vec())?;

    let (joints, pieces): (Vec<DVec3>, Vec<(DVec3, DVec3)>) = match &options.stipple {
        Some(pattern) => {
            let samples = stipple(&path, pattern, Boundary::Clamp)?;
            let dashed = samples.len() / 2 * 2;
            let dashes = samples[..dashed].chunks_exact(2).map(|pair| (pair[0], pair[1])).collect();
            (samples[..dashed].to_vec(), dashes)
        }
        None => {
            let segments = points.windows(2).map(|pair| (pair[0], pair[1])).collect();
            (points.to_vec(), segments)
        }
    };

    let mut node = merge(cylinders(&pieces, radius));
    if options.smooth {
        node.extend(distinct(&joints).iter().map(|p| sphere(p, radius)));
    }

    log::debug!(
        "built line of {} points into {} pieces",
        points.len(),
        node.children().len()
    );
    Ok(node)
}

/// A solid line with cone arrowheads.
///
/// Arrowhead intervals come from resampling the path with the pattern
/// `[separation, length]` and [`Boundary::Exclude`]: the first arrowhead
/// starts `separation` along the path and they repeat every
/// `separation + length`. Each cone replaces the line over its interval;
/// the portions between cones are cylinders following the path's vertices.
pub fn arrowed_line(
    points: &[DVec3],
    radius: f64,
    arrows: &ArrowStyle,
    smooth: bool,
) -> Result<Node, LineError> {
    check_radius(radius)?;
    check_radius(arrows.width)?;
    let path = Polyline::new(points.to_vec())?;
    let total = path.length();

    let positions = sample_positions(total, &[arrows.separation, arrows.length], Boundary::Exclude)?;
    let heads: Vec<(f64, f64)> = positions[1..].chunks_exact(2).map(|c| (c[0], c[1])).collect();

    let mut pieces = Vec::new();
    let mut joints = Vec::new();
    let mut cursor = 0.0;
    for &(start, end) in heads.iter().chain(std::iter::once(&(total, total))) {
        if start > cursor {
            let portion = path.slice(cursor, start);
            pieces.extend(cylinders(&pairs(&portion), radius));
            if smooth {
                joints.extend(portion_joints(&portion, cursor == 0.0, start >= total));
            }
        }
        if end > start {
            let (tail, tip) = if arrows.reverse { (end, start) } else { (start, end) };
            pieces.push(cone(&path.point_at(tail), arrows.width, &path.point_at(tip), 0));
        }
        cursor = end;
    }

    let mut node = merge(pieces);
    node.extend(distinct(&joints).iter().map(|p| sphere(p, radius)));

    log::debug!(
        "built arrowed line with {} arrowheads over length {total}",
        heads.len()
    );
    Ok(node)
}

// =============================================================================
// HELPERS
// =============================================================================

fn check_radius(radius: f64) -> Result<(), LineError> {
    if radius.is_finite() && radius >= 0.0 {
        Ok(())
    } else {
        Err(LineError::InvalidRadius { radius })
    }
}

fn pairs(points: &[DVec3]) -> Vec<(DVec3, DVec3)> {
    points.windows(2).map(|pair| (pair[0], pair[1])).collect()
}

fn cylinders(pieces: &[(DVec3, DVec3)], radius: f64) -> Vec<Node> {
    pieces
        .iter()
        .filter(|(a, b)| a.distance(*b) > 0.0)
        .map(|(a, b)| cylinder(a, b, radius))
        .collect()
}

/// Joints of a line portion; ends touching an arrowhead are left to the cone.
fn portion_joints(portion: &[DVec3], path_start: bool, path_end: bool) -> Vec<DVec3> {
    let first = usize::from(!path_start);
    let last = portion.len() - usize::from(!path_end);
    portion.get(first..last).map(<[DVec3]>::to_vec).unwrap_or_default()
}

/// Drops repeated points, keeping the first occurrence of each.
fn distinct(points: &[DVec3]) -> Vec<DVec3> {
    let mut seen = HashSet::new();
    points
        .iter()
        .copied()
        .filter(|p| {
            // Adding zero folds -0.0 into 0.0 so both hash alike.
            let p = *p + DVec3::ZERO;
            seen.insert([p.x.to_bits(), p.y.to_bits(), p.z.to_bits()])
        })
        .collect()
}
