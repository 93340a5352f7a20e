//! # Mesh Errors
//!
//! Error types for grid triangulation and mesh construction.

use thiserror::Error;

/// Errors that can occur while building a mesh.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// The mesh cannot produce well-defined normals.
    #[error("Degenerate mesh: {message}")]
    DegenerateMesh { message: String },

    /// A triangle refers to a vertex that does not exist.
    #[error("Triangle {triangle} refers to vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },

    /// A vertex has a zero or non-finite accumulated normal.
    #[error("Degenerate mesh: vertex {vertex} has no usable normal")]
    ZeroNormal { vertex: usize },

    /// Flat buffers or grids with an unusable shape.
    #[error("Invalid shape: {message}")]
    InvalidShape { message: String },

    /// Grid components of differing shapes.
    #[error("Grid shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// Too many vertices for 32-bit indices.
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },
}

impl MeshError {
    /// Creates a degenerate mesh error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateMesh {
            message: message.into(),
        }
    }

    /// Creates an invalid shape error.
    pub fn invalid_shape(message: impl Into<String>) -> Self {
        Self::InvalidShape {
            message: message.into(),
        }
    }
}
