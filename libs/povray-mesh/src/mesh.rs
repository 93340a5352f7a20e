//! # Mesh Data Structure
//!
//! Triangle mesh with per-face and per-vertex normals, computed once at
//! construction and immutable afterwards.

use crate::error::MeshError;
use glam::DVec3;

/// A validated triangle mesh.
///
/// # Example
///
/// ```rust
/// use povray_mesh::Mesh;
/// use glam::DVec3;
///
/// let mesh = Mesh::new(
///     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
///     vec![[0, 1, 2]],
/// ).unwrap();
/// assert_eq!(mesh.face_normals()[0], DVec3::Z);
/// assert_eq!(mesh.vertex_normals()[2], DVec3::Z);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<DVec3>,
    triangles: Vec<[u32; 3]>,
    /// Unnormalized; length is twice the triangle area.
    face_normals: Vec<DVec3>,
    /// Unit length.
    vertex_normals: Vec<DVec3>,
}

impl Mesh {
    /// Validates the topology and computes normals.
    ///
    /// Fails when there are no triangles, a triangle index is out of range, or
    /// some vertex ends up without a usable normal (isolated vertex, or
    /// incident face normals that cancel out).
    pub fn new(vertices: Vec<DVec3>, triangles: Vec<[u32; 3]>) -> Result<Self, MeshError> {
        if triangles.is_empty() {
            return Err(MeshError::degenerate("mesh has no triangles"));
        }
        check_indices(vertices.len(), &triangles)?;

        let face_normals = face_normals(&vertices, &triangles);
        let vertex_normals = vertex_normals(vertices.len(), &triangles, &face_normals)?;

        log::debug!(
            "built mesh with {} vertices and {} triangles",
            vertices.len(),
            triangles.len()
        );

        Ok(Self {
            vertices,
            triangles,
            face_normals,
            vertex_normals,
        })
    }

    /// Builds a mesh from flat buffers: `x, y, z` triples and index triples.
    pub fn from_flat(coordinates: &[f64], indices: &[u32]) -> Result<Self, MeshError> {
        if coordinates.len() % 3 != 0 {
            return Err(MeshError::invalid_shape(format!(
                "{} coordinates do not form 3-D points",
                coordinates.len()
            )));
        }
        if indices.len() % 3 != 0 {
            return Err(MeshError::invalid_shape(format!(
                "{} indices do not form (n, 3) triangles",
                indices.len()
            )));
        }

        let vertices = coordinates
            .chunks_exact(3)
            .map(|c| DVec3::new(c[0], c[1], c[2]))
            .collect();
        let triangles = indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]]).collect();
        Self::new(vertices, triangles)
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    #[inline]
    pub fn face_normals(&self) -> &[DVec3] {
        &self.face_normals
    }

    #[inline]
    pub fn vertex_normals(&self) -> &[DVec3] {
        &self.vertex_normals
    }
}

fn check_indices(vertex_count: usize, triangles: &[[u32; 3]]) -> Result<(), MeshError> {
    for (triangle, indices) in triangles.iter().enumerate() {
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(MeshError::IndexOutOfRange {
                triangle,
                index,
                vertex_count,
            });
        }
    }
    Ok(())
}

/// `(B - A) × (C - A)` for each triangle `(A, B, C)`.
///
/// Winding decides orientation; the length encodes twice the area.
pub fn face_normals(vertices: &[DVec3], triangles: &[[u32; 3]]) -> Vec<DVec3> {
    triangles
        .iter()
        .map(|&[a, b, c]| {
            let a = vertices[a as usize];
            let b = vertices[b as usize];
            let c = vertices[c as usize];
            (b - a).cross(c - a)
        })
        .collect()
}

/// Sums the face normals incident on each vertex and normalizes the result.
pub fn vertex_normals(
    vertex_count: usize,
    triangles: &[[u32; 3]],
    face_normals: &[DVec3],
) -> Result<Vec<DVec3>, MeshError> {
    let mut sums = vec![DVec3::ZERO; vertex_count];
    for (tri, normal) in triangles.iter().zip(face_normals) {
        for &index in tri {
            sums[index as usize] += *normal;
        }
    }

    sums.into_iter()
        .enumerate()
        .map(|(vertex, sum)| sum.try_normalize().ok_or(MeshError::ZeroNormal { vertex }))
        .collect()
}
