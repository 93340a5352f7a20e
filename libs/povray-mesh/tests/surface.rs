//! End-to-end surface generation: sample a function on a grid, triangulate,
//! estimate normals and write the `mesh2` object.

use approx::assert_relative_eq;
use povray_mesh::grid::{linspace, meshgrid, triangulate_grid, Grid};
use povray_mesh::{Mesh2, MeshError};

fn bump(n: usize) -> (Grid, Grid, Grid) {
    let axis = linspace(0.0, 1.0, n);
    let (x, y) = meshgrid(&axis, &axis);
    let z = Grid::from_fn(n, n, |r, c| {
        let (xv, yv) = (x.get(r, c), y.get(r, c));
        xv * (1.0 - xv) * yv * (1.0 - yv)
    });
    (x, y, z)
}

#[test]
fn surface_mesh_has_expected_counts() {
    let n = 25;
    let (x, y, z) = bump(n);
    let surface = triangulate_grid(&[&x, &y, &z]).unwrap();
    assert_eq!(surface.coordinates.len(), n * n);
    assert_eq!(surface.triangles.len(), 2 * (n - 1) * (n - 1));

    let mesh = Mesh2::new(surface.points3().unwrap(), surface.triangles).unwrap();
    for normal in mesh.mesh().vertex_normals() {
        assert_relative_eq!(normal.length(), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn grid_winding_gives_consistent_orientation() {
    let (x, y, z) = bump(6);
    let surface = triangulate_grid(&[&x, &y, &z]).unwrap();
    let mesh = Mesh2::new(surface.points3().unwrap(), surface.triangles).unwrap();

    // x runs along columns and y along rows, so every face points down.
    assert!(mesh.mesh().face_normals().iter().all(|n| n.z < 0.0));
}

#[test]
fn surface_serializes_as_mesh2() {
    let (x, y, z) = bump(4);
    let surface = triangulate_grid(&[&x, &y, &z]).unwrap();
    let mesh = Mesh2::new(surface.points3().unwrap(), surface.triangles)
        .unwrap()
        .with_inside_vector(&[0.0, 0.0, 1.0]);

    let text = mesh.to_node().to_pov_string().unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "mesh2 {");
    assert!(lines[1].starts_with("  vertex_vectors {16, "));
    assert!(lines[2].starts_with("  normal_vectors {16, "));
    assert!(lines[3].starts_with("  face_indices {18, <0,4,1>, <1,4,5>"));
    assert_eq!(lines[4], "  inside_vector <0,0,1>");
    assert_eq!(lines[5], "}");
}

#[test]
fn single_row_grid_cannot_form_a_mesh() {
    let x = Grid::from_fn(1, 4, |_, c| c as f64);
    let zeros = Grid::zeros(1, 4);
    let surface = triangulate_grid(&[&x, &zeros, &zeros]).unwrap();
    assert!(surface.triangles.is_empty());
    assert!(matches!(
        Mesh2::new(surface.points3().unwrap(), surface.triangles),
        Err(MeshError::DegenerateMesh { .. })
    ));
}
