//! # Polyline
//!
//! Ordered 3-D points parametrized by cumulative arc length, so positions
//! along the line are uniform in physical distance rather than in vertex
//! count.

use crate::error::LineError;
use glam::DVec3;

/// A polyline with its cumulative arc lengths.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<DVec3>,
    /// `arc_lengths[0] == 0`; `arc_lengths[i]` is the distance travelled to
    /// reach `points[i]`.
    arc_lengths: Vec<f64>,
}

impl Polyline {
    /// Requires at least two points, all finite.
    pub fn new(points: Vec<DVec3>) -> Result<Self, LineError> {
        if points.len() < 2 {
            return Err(LineError::resampling(format!(
                "a polyline needs at least 2 points, got {}",
                points.len()
            )));
        }
        if let Some(i) = points.iter().position(|p| !p.is_finite()) {
            return Err(LineError::resampling(format!(
                "polyline point {i} has non-finite coordinates"
            )));
        }

        let mut arc_lengths = Vec::with_capacity(points.len());
        let mut travelled = 0.0;
        arc_lengths.push(travelled);
        for pair in points.windows(2) {
            travelled += pair[0].distance(pair[1]);
            arc_lengths.push(travelled);
        }

        Ok(Self { points, arc_lengths })
    }

    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    pub fn arc_lengths(&self) -> &[f64] {
        &self.arc_lengths
    }

    /// Total arc length.
    pub fn length(&self) -> f64 {
        self.arc_lengths[self.arc_lengths.len() - 1]
    }

    /// Position at arc length `s`, linearly interpolated between the
    /// neighbouring vertices. `s` is clamped to `[0, length]`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use povray_lines::Polyline;
    ///
    /// let path = Polyline::new(vec![DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0)]).unwrap();
    /// assert_eq!(path.point_at(1.5), DVec3::new(1.0, 0.5, 0.0));
    /// ```
    pub fn point_at(&self, s: f64) -> DVec3 {
        let s = s.clamp(0.0, self.length());
        let last_segment = self.points.len() - 2;
        let segment = self
            .arc_lengths
            .partition_point(|&l| l <= s)
            .saturating_sub(1)
            .min(last_segment);

        let start = self.arc_lengths[segment];
        let span = self.arc_lengths[segment + 1] - start;
        if span <= 0.0 {
            return self.points[segment];
        }
        let a = self.points[segment];
        let b = self.points[segment + 1];
        a + (b - a) * ((s - start) / span)
    }

    /// The part of the polyline between arc lengths `start` and `end`: the
    /// interpolated end points plus every vertex strictly between them.
    pub fn slice(&self, start: f64, end: f64) -> Vec<DVec3> {
        let mut points = vec![self.point_at(start)];
        points.extend(
            self.points
                .iter()
                .zip(&self.arc_lengths)
                .filter(|(_, &l)| l > start && l < end)
                .map(|(p, _)| *p),
        );
        points.push(self.point_at(end));
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn bent() -> Polyline {
        Polyline::new(vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(3.0, 0.0, 0.0),
            DVec3::new(3.0, 4.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_arc_lengths_accumulate() {
        let path = bent();
        assert_eq!(path.arc_lengths(), &[0.0, 3.0, 7.0]);
        assert_eq!(path.length(), 7.0);
    }

    #[test]
    fn test_point_at_is_uniform_in_distance() {
        let path = bent();
        assert_eq!(path.point_at(0.0), DVec3::ZERO);
        assert_eq!(path.point_at(3.0), DVec3::new(3.0, 0.0, 0.0));
        let p = path.point_at(5.0);
        assert_relative_eq!(p.x, 3.0);
        assert_relative_eq!(p.y, 2.0);
        assert_eq!(path.point_at(7.0), DVec3::new(3.0, 4.0, 0.0));
    }

    #[test]
    fn test_point_at_clamps() {
        let path = bent();
        assert_eq!(path.point_at(-1.0), DVec3::ZERO);
        assert_eq!(path.point_at(99.0), DVec3::new(3.0, 4.0, 0.0));
    }

    #[test]
    fn test_repeated_vertices_do_not_divide_by_zero() {
        let path = Polyline::new(vec![DVec3::ZERO, DVec3::ZERO, DVec3::X]).unwrap();
        assert_eq!(path.point_at(0.0), DVec3::ZERO);
        assert_eq!(path.point_at(0.5), DVec3::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn test_slice_keeps_interior_vertices() {
        let path = bent();
        let piece = path.slice(1.0, 5.0);
        assert_eq!(piece.len(), 3);
        assert_eq!(piece[1], DVec3::new(3.0, 0.0, 0.0));
        assert_relative_eq!(piece[2].y, 2.0);
    }

    #[test]
    fn test_non_finite_points_are_rejected() {
        for bad in [f64::NAN, f64::INFINITY] {
            let err = Polyline::new(vec![DVec3::ZERO, DVec3::new(bad, 0.0, 0.0)]).unwrap_err();
            assert!(matches!(err, LineError::InvalidResampling { .. }));
        }
    }

    #[test]
    fn test_too_few_points() {
        assert!(matches!(
            Polyline::new(vec![DVec3::ONE]),
            Err(LineError::InvalidResampling { .. })
        ));
    }
}
