//! Molecule scene preset, rendered end to end.

use approx::assert_relative_eq;
use glam::DVec3;
use povray_ast::Node;
use povray_scene::{molecule_scene, MoleculeOptions, Projection, SceneError};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn tetrahedron() -> Vec<DVec3> {
    // Edge length 0.6 * sqrt(2), inside the default bond threshold.
    let s = 0.3;
    vec![
        DVec3::new(s, s, s),
        DVec3::new(s, -s, -s),
        DVec3::new(-s, s, -s),
        DVec3::new(-s, -s, s),
    ]
}

fn top_level_tags(node: &Node) -> Vec<&str> {
    node.children().iter().map(Node::tag).collect()
}

/// Parses `<x,y,z>` back into a vector.
fn parse_vector(text: &str) -> DVec3 {
    let parts: Vec<f64> = text
        .trim_matches(|c| c == '<' || c == '>')
        .split(',')
        .map(|p| p.parse().unwrap())
        .collect();
    DVec3::new(parts[0], parts[1], parts[2])
}

#[test]
fn scene_layout() {
    let mut rng = StdRng::seed_from_u64(7);
    let scene = molecule_scene(&tetrahedron(), &MoleculeOptions::default(), &mut rng).unwrap();

    assert_eq!(
        top_level_tags(scene.document()),
        vec![
            "#version",
            "#include",
            "#include",
            "global_settings",
            "#declare ballFinish",
            "#declare stickFinish",
            "#declare cameraPos",
            "#declare focusPos",
            "camera",
            "light_source",
            "merge",
            "merge",
        ]
    );

    let text = scene.to_pov_string().unwrap();
    assert!(text.contains("\n#declare focusPos = <0,0,0>;\n"));
    assert!(text.contains("\n  finish {ballFinish}\n"));
    assert!(text.contains("\n  finish {stickFinish}\n"));
    assert!(text.contains("\n  look_at focusPos\n"));
    assert!(text.contains("light_source {\n  cameraPos\n  colour White\n  parallel\n  point_at focusPos\n  shadowless\n}"));
}

#[test]
fn camera_sits_at_scaled_distance() {
    let coordinates = tetrahedron();
    let options = MoleculeOptions::default();
    let mut rng = StdRng::seed_from_u64(11);
    let scene = molecule_scene(&coordinates, &options, &mut rng).unwrap();

    let declaration = scene
        .document()
        .children()
        .iter()
        .find(|c| c.tag() == "#declare cameraPos")
        .unwrap();
    let position = parse_vector(declaration.value().unwrap());

    let max_distance = coordinates.iter().map(|x| x.length()).fold(0.0, f64::max);
    assert_relative_eq!(
        position.length(),
        options.camera_distance * max_distance,
        epsilon = 1e-9
    );
    // Components are drawn from [0, 1) before normalizing.
    assert!(position.min_element() >= 0.0);
}

#[test]
fn seeded_scenes_are_reproducible() {
    let options = MoleculeOptions::default();
    let a = molecule_scene(&tetrahedron(), &options, &mut StdRng::seed_from_u64(3))
        .unwrap()
        .to_pov_string()
        .unwrap();
    let b = molecule_scene(&tetrahedron(), &options, &mut StdRng::seed_from_u64(3))
        .unwrap()
        .to_pov_string()
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn orthographic_scene_scales_the_frame() {
    let options = MoleculeOptions {
        projection: Projection::Orthographic,
        ..MoleculeOptions::default()
    };
    let scene = molecule_scene(&tetrahedron(), &options, &mut StdRng::seed_from_u64(5)).unwrap();
    let camera = scene
        .document()
        .children()
        .iter()
        .find(|c| c.tag() == "camera")
        .unwrap();

    assert_eq!(camera.children()[0].tag(), "orthographic");
    let right = camera.children().iter().find(|c| c.tag() == "right").unwrap();
    assert_relative_eq!(parse_vector(right.value().unwrap()).x, 2.4, epsilon = 1e-12);
}

#[test]
fn isolated_particles_fail() {
    let far = [DVec3::ZERO, DVec3::new(0.0, 0.0, 10.0)];
    let err = molecule_scene(&far, &MoleculeOptions::default(), &mut StdRng::seed_from_u64(1)).unwrap_err();
    assert_eq!(err, SceneError::NoBonds);
}
