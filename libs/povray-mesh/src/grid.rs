//! # Grid Triangulation
//!
//! Regularly sampled surfaces stored as one [`Grid`] per coordinate
//! component, as produced by [`meshgrid`]. Gridded samples split naturally
//! into quad strips, which makes triangulation a pure index computation.

use crate::error::MeshError;
use glam::DVec3;
use serde::{Deserialize, Serialize};

// =============================================================================
// GRID
// =============================================================================

/// Row-major `(nrows, ncols)` array of samples of one coordinate component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    nrows: usize,
    ncols: usize,
    values: Vec<f64>,
}

impl Grid {
    /// Wraps row-major `values`.
    pub fn new(nrows: usize, ncols: usize, values: Vec<f64>) -> Result<Self, MeshError> {
        if values.len() != nrows * ncols {
            return Err(MeshError::invalid_shape(format!(
                "{} values cannot fill a {nrows}x{ncols} grid",
                values.len()
            )));
        }
        Ok(Self { nrows, ncols, values })
    }

    /// Builds a grid from rows of equal length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, MeshError> {
        let ncols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().position(|row| row.len() != ncols) {
            return Err(MeshError::invalid_shape(format!(
                "row {bad} has {} columns, expected {ncols}",
                rows[bad].len()
            )));
        }
        Ok(Self {
            nrows: rows.len(),
            ncols,
            values: rows.concat(),
        })
    }

    /// Samples `f(row, col)` at every grid position.
    pub fn from_fn(nrows: usize, ncols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut values = Vec::with_capacity(nrows * ncols);
        for r in 0..nrows {
            for c in 0..ncols {
                values.push(f(r, c));
            }
        }
        Self { nrows, ncols, values }
    }

    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            values: vec![0.0; nrows * ncols],
        }
    }

    /// `(nrows, ncols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.ncols + col]
    }

    /// Samples in row-major order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.values[row * self.ncols..(row + 1) * self.ncols]
    }

    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().skip(col).step_by(self.ncols.max(1)).copied()
    }

    /// Applies `f` to every sample.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            nrows: self.nrows,
            ncols: self.ncols,
            values: self.values.iter().map(|&v| f(v)).collect(),
        }
    }
}

/// `n` evenly spaced samples from `start` to `stop` inclusive.
///
/// # Example
///
/// ```rust
/// use povray_mesh::grid::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Coordinate grids from axis samples: `x` varies along columns and `y`
/// along rows, so both grids have shape `(ys.len(), xs.len())`.
pub fn meshgrid(xs: &[f64], ys: &[f64]) -> (Grid, Grid) {
    let x = Grid::from_fn(ys.len(), xs.len(), |_, c| xs[c]);
    let y = Grid::from_fn(ys.len(), xs.len(), |r, _| ys[r]);
    (x, y)
}

// =============================================================================
// TRIANGULATION
// =============================================================================

/// Vertex coordinates and triangles of a triangulated grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridTriangulation {
    /// One point per grid sample, row-major; one coordinate per component.
    pub coordinates: Vec<Vec<f64>>,
    /// Vertex index triples.
    pub triangles: Vec<[u32; 3]>,
}

impl GridTriangulation {
    /// Coordinates as 3-D points; requires exactly three grid components.
    pub fn points3(&self) -> Result<Vec<DVec3>, MeshError> {
        self.coordinates
            .iter()
            .map(|point| match point.as_slice() {
                [x, y, z] => Ok(DVec3::new(*x, *y, *z)),
                other => Err(MeshError::invalid_shape(format!(
                    "expected 3 coordinate components, found {}",
                    other.len()
                ))),
            })
            .collect()
    }
}

/// Triangle indices for a `(nrows, ncols)` grid.
///
/// Each cell with top-left flattened index `i` contributes `[i, i+ncols, i+1]`
/// and `[i+1, i+ncols, i+ncols+1]`; cells run left to right, then row by row.
/// Grids with fewer than two rows or columns have no cells.
///
/// # Example
///
/// ```rust
/// use povray_mesh::grid::grid_triangles;
///
/// assert_eq!(grid_triangles(2, 2), vec![[0, 2, 1], [1, 2, 3]]);
/// assert!(grid_triangles(1, 8).is_empty());
/// ```
pub fn grid_triangles(nrows: usize, ncols: usize) -> Vec<[u32; 3]> {
    if nrows < 2 || ncols < 2 {
        return Vec::new();
    }

    let n = ncols as u32;
    let mut triangles = Vec::with_capacity(2 * (nrows - 1) * (ncols - 1));
    for r in 0..nrows - 1 {
        for c in 0..ncols - 1 {
            let i = (r * ncols + c) as u32;
            triangles.push([i, i + n, i + 1]);
            triangles.push([i + 1, i + n, i + n + 1]);
        }
    }
    triangles
}

/// Triangulates gridded coordinates.
///
/// Every component must have the same shape. The vertex for sample `(r, c)`
/// sits at index `r * ncols + c`.
pub fn triangulate_grid(components: &[&Grid]) -> Result<GridTriangulation, MeshError> {
    let (nrows, ncols) = common_shape(components)?;

    let count = nrows * ncols;
    if count > u32::MAX as usize {
        return Err(MeshError::TooManyVertices {
            count,
            max: u32::MAX as usize,
        });
    }

    let coordinates = (0..count)
        .map(|i| components.iter().map(|grid| grid.values[i]).collect())
        .collect();
    let triangles = grid_triangles(nrows, ncols);

    log::debug!(
        "triangulated {nrows}x{ncols} grid into {} triangles",
        triangles.len()
    );

    Ok(GridTriangulation {
        coordinates,
        triangles,
    })
}

/// Polylines along the grid: one per row, then one per column.
pub fn grid_lines(x: &Grid, y: &Grid, z: &Grid) -> Result<(Vec<Vec<DVec3>>, Vec<Vec<DVec3>>), MeshError> {
    let (nrows, ncols) = common_shape(&[x, y, z])?;
    let point = |r: usize, c: usize| DVec3::new(x.get(r, c), y.get(r, c), z.get(r, c));

    let rows = (0..nrows)
        .map(|r| (0..ncols).map(|c| point(r, c)).collect())
        .collect();
    let columns = (0..ncols)
        .map(|c| (0..nrows).map(|r| point(r, c)).collect())
        .collect();
    Ok((rows, columns))
}

fn common_shape(components: &[&Grid]) -> Result<(usize, usize), MeshError> {
    let first = components
        .first()
        .ok_or_else(|| MeshError::invalid_shape("no grid components given"))?;
    let expected = first.shape();
    for grid in &components[1..] {
        if grid.shape() != expected {
            return Err(MeshError::ShapeMismatch {
                expected,
                found: grid.shape(),
            });
        }
    }
    Ok(expected)
}
