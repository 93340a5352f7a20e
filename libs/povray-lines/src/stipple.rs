//! # Stippling
//!
//! Resamples a polyline at arc-length positions given by a repeating
//! pattern of lengths. Consecutive sample pairs are the "on" parts of a
//! dashed line, or the intervals occupied by arrowheads.
//!
//! For pattern `[a, b]` the positions are
//!
//! ```text
//! 0, a, a+b, (a+b)+a, 2(a+b), ...
//! ```
//!
//! continuing while the start of each period lies before the end of the
//! path.

use crate::error::LineError;
use crate::polyline::Polyline;
use config::constants::{approx_equal, MAX_STIPPLE_SAMPLES};
use glam::DVec3;

/// What to do with sample positions that run past the end of the path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Boundary {
    /// The first overshooting position becomes the end of the path and
    /// everything after it is dropped.
    #[default]
    Clamp,
    /// Overshooting positions are dropped.
    Exclude,
}

/// Arc-length sample positions for a path of length `total`.
///
/// # Example
///
/// ```rust
/// use povray_lines::{sample_positions, Boundary};
///
/// let exact = sample_positions(10.0, &[2.0, 2.0], Boundary::Exclude).unwrap();
/// assert_eq!(exact, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
///
/// let clamped = sample_positions(9.0, &[2.0], Boundary::Clamp).unwrap();
/// assert_eq!(clamped, vec![0.0, 2.0, 4.0, 6.0, 8.0, 9.0]);
/// ```
pub fn sample_positions(total: f64, pattern: &[f64], boundary: Boundary) -> Result<Vec<f64>, LineError> {
    let offsets = pattern_offsets(pattern)?;
    if !total.is_finite() || total <= 0.0 {
        return Err(LineError::resampling(format!(
            "cannot resample a path of length {total}"
        )));
    }

    let period = offsets[offsets.len() - 1];
    let periods = (total / period).ceil();
    let estimate = periods * offsets.len() as f64 + 1.0;
    if estimate > MAX_STIPPLE_SAMPLES as f64 {
        return Err(LineError::resampling(format!(
            "pattern period {period} over length {total} needs about {estimate} samples, \
             more than {MAX_STIPPLE_SAMPLES}"
        )));
    }

    let mut positions = Vec::with_capacity(estimate as usize);
    positions.push(0.0);
    let mut k = 0_u64;
    loop {
        let start = k as f64 * period;
        if start >= total {
            break;
        }
        positions.extend(offsets.iter().map(|offset| start + offset));
        k += 1;
    }

    // Rounding in the running sum must not push the exact end past the path.
    let inside = |s: f64| s <= total || approx_equal(s, total);
    match boundary {
        Boundary::Exclude => positions.retain(|&s| inside(s)),
        Boundary::Clamp => {
            if let Some(first_out) = positions.iter().position(|&s| !inside(s)) {
                positions[first_out] = total;
                positions.truncate(first_out + 1);
            }
        }
    }

    log::trace!(
        "resampled path of length {total} into {} positions ({boundary:?})",
        positions.len()
    );
    Ok(positions)
}

/// Points along `path` at the positions of [`sample_positions`].
pub fn stipple(path: &Polyline, pattern: &[f64], boundary: Boundary) -> Result<Vec<DVec3>, LineError> {
    let positions = sample_positions(path.length(), pattern, boundary)?;
    Ok(positions.into_iter().map(|s| path.point_at(s)).collect())
}

/// [`stipple`] for raw points.
pub fn stipple_points(points: &[DVec3], pattern: &[f64], boundary: Boundary) -> Result<Vec<DVec3>, LineError> {
    let path = Polyline::new(points.to_vec())?;
    stipple(&path, pattern, boundary)
}

/// Inclusive running sum of the pattern, after validating it.
fn pattern_offsets(pattern: &[f64]) -> Result<Vec<f64>, LineError> {
    if pattern.is_empty() {
        return Err(LineError::resampling("stipple pattern is empty"));
    }
    if let Some(bad) = pattern.iter().find(|l| !l.is_finite() || **l < 0.0) {
        return Err(LineError::resampling(format!(
            "stipple lengths must be finite and non-negative, got {bad}"
        )));
    }

    let offsets: Vec<f64> = pattern
        .iter()
        .scan(0.0, |sum, length| {
            *sum += length;
            Some(*sum)
        })
        .collect();

    if offsets[offsets.len() - 1] <= 0.0 {
        return Err(LineError::resampling("stipple pattern has zero period"));
    }
    Ok(offsets)
}
