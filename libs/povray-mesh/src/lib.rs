//! # POV-Ray Mesh
//!
//! Triangle meshes for POV-Ray `mesh2` objects.
//!
//! ## Architecture
//!
//! ```text
//! Grid samples → grid::triangulate_grid → Mesh (face + vertex normals) → mesh2 node
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use povray_mesh::grid::{linspace, meshgrid, triangulate_grid, Grid};
//! use povray_mesh::Mesh2;
//!
//! let (x, y) = meshgrid(&linspace(0.0, 1.0, 5), &linspace(0.0, 1.0, 5));
//! let z = Grid::from_fn(5, 5, |r, c| x.get(r, c) * y.get(r, c));
//!
//! let surface = triangulate_grid(&[&x, &y, &z]).unwrap();
//! let mesh = Mesh2::new(surface.points3().unwrap(), surface.triangles).unwrap();
//! let text = mesh.to_node().to_pov_string().unwrap();
//! assert!(text.starts_with("mesh2 {\n  vertex_vectors {25, <0,0,0>"));
//! ```

pub mod error;
pub mod grid;
pub mod mesh;
pub mod mesh2;

pub use error::MeshError;
pub use mesh::Mesh;
pub use mesh2::Mesh2;
