//! # mesh2 Objects
//!
//! Converts a [`Mesh`] into a POV-Ray `mesh2` node carrying vertex
//! positions, smoothed normals and face indices.
//!
//! ```text
//! mesh2 {
//!   vertex_vectors {n, <x,y,z>, ...}
//!   normal_vectors {n, <x,y,z>, ...}
//!   face_indices {m, <a,b,c>, ...}
//!   inside_vector <x,y,z>
//! }
//! ```

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;
use povray_ast::{pov_vector, Node, PovVector};

/// A mesh ready to be written as a `mesh2` object.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh2 {
    mesh: Mesh,
    inside_vector: Option<String>,
}

impl Mesh2 {
    /// Builds the mesh, computing normals. See [`Mesh::new`] for failures.
    pub fn new(vertices: Vec<DVec3>, triangles: Vec<[u32; 3]>) -> Result<Self, MeshError> {
        Ok(Self::from_mesh(Mesh::new(vertices, triangles)?))
    }

    pub fn from_mesh(mesh: Mesh) -> Self {
        Self {
            mesh,
            inside_vector: None,
        }
    }

    /// Direction POV-Ray casts rays along to decide what lies inside the
    /// mesh. Stored verbatim; may be a declared identifier.
    pub fn with_inside_vector<V: PovVector + ?Sized>(mut self, direction: &V) -> Self {
        self.inside_vector = Some(pov_vector(direction));
        self
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn inside_vector(&self) -> Option<&str> {
        self.inside_vector.as_deref()
    }

    /// Builds the `mesh2` node.
    pub fn to_node(&self) -> Node {
        let mut node = Node::block("Mesh2").with_children([
            vector_bundle("VertexVectors", self.mesh.vertices()),
            vector_bundle("NormalVectors", self.mesh.vertex_normals()),
            vector_bundle("FaceIndices", self.mesh.triangles()),
        ]);
        if let Some(direction) = &self.inside_vector {
            node.push(Node::attribute("InsideVector", direction));
        }
        node
    }
}

impl From<Mesh2> for Node {
    fn from(mesh: Mesh2) -> Self {
        mesh.to_node()
    }
}

/// `keyword {count, <..>, <..>, ...}`
pub fn vector_bundle<V: PovVector>(type_name: &str, vectors: &[V]) -> Node {
    let mut body = vectors.len().to_string();
    for vector in vectors {
        body.push_str(", ");
        body.push_str(&vector.to_pov_vector());
    }
    Node::block(type_name).with_body(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Mesh2 {
        Mesh2::new(
            vec![
                DVec3::new(0.0, 0.0, 0.0),
                DVec3::new(1.0, 0.0, 0.0),
                DVec3::new(0.0, 1.0, 0.0),
                DVec3::new(1.0, 1.0, 0.0),
            ],
            vec![[0, 2, 1], [1, 2, 3]],
        )
        .unwrap()
    }

    #[test]
    fn test_mesh2_layout() {
        let text = square().to_node().to_pov_string().unwrap();
        let expected = "\
mesh2 {
  vertex_vectors {4, <0,0,0>, <1,0,0>, <0,1,0>, <1,1,0>}
  normal_vectors {4, <0,0,-1>, <0,0,-1>, <0,0,-1>, <0,0,-1>}
  face_indices {2, <0,2,1>, <1,2,3>}
}";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_inside_vector_passes_through() {
        let node: Node = square().with_inside_vector(&[0.0, 0.0, 1.0]).into();
        let last = node.children().last().unwrap();
        assert_eq!(last.tag(), "inside_vector");
        assert_eq!(last.value(), Some("<0,0,1>"));

        let symbolic = square().with_inside_vector("insideDir");
        assert_eq!(symbolic.inside_vector(), Some("insideDir"));
    }

    #[test]
    fn test_vector_bundle_empty() {
        let empty: [DVec3; 0] = [];
        assert_eq!(vector_bundle("VertexVectors", &empty).body(), Some("0"));
    }
}
