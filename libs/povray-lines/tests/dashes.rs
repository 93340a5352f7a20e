//! End-to-end checks from polyline to POV-Ray text.

use approx::assert_relative_eq;
use glam::DVec3;
use povray_lines::{arrowed_line, line, sample_positions, stipple_points, ArrowStyle, Boundary, LineOptions};

#[test]
fn dashed_line_serializes_as_merge_of_cylinders() {
    let options = LineOptions {
        stipple: Some(vec![2.0, 2.0]),
        smooth: false,
    };
    let text = line(&[DVec3::ZERO, DVec3::new(10.0, 0.0, 0.0)], 0.1, &options)
        .unwrap()
        .to_pov_string()
        .unwrap();

    let expected = "\
merge {
  cylinder {<0,0,0>, <2,0,0>, 0.1}
  cylinder {<4,0,0>, <6,0,0>, 0.1}
  cylinder {<8,0,0>, <10,0,0>, 0.1}
}";
    assert_eq!(text, expected);
}

#[test]
fn samples_are_uniform_in_arc_length() {
    // A zigzag with unequal segment lengths.
    let points = [
        DVec3::ZERO,
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(1.0, 3.0, 0.0),
        DVec3::new(5.0, 3.0, 0.0),
    ];
    let samples = stipple_points(&points, &[0.5], Boundary::Exclude).unwrap();
    assert_eq!(samples.len(), 17);
    for pair in samples.windows(2) {
        // Consecutive samples on the same segment are exactly one step apart.
        if pair[0].x == pair[1].x || pair[0].y == pair[1].y {
            assert_relative_eq!(pair[0].distance(pair[1]), 0.5, epsilon = 1e-12);
        }
    }
    assert_eq!(samples[16], DVec3::new(5.0, 3.0, 0.0));
}

#[test]
fn clamp_and_exclude_differ_only_at_the_end() {
    let exclude = sample_positions(7.0, &[2.0], Boundary::Exclude).unwrap();
    let clamp = sample_positions(7.0, &[2.0], Boundary::Clamp).unwrap();
    assert_eq!(exclude, vec![0.0, 2.0, 4.0, 6.0]);
    assert_eq!(clamp, vec![0.0, 2.0, 4.0, 6.0, 7.0]);
}

#[test]
fn smooth_dashes_put_spheres_on_every_sample() {
    let options = LineOptions {
        stipple: Some(vec![1.0, 1.0]),
        smooth: true,
    };
    let node = line(&[DVec3::ZERO, DVec3::new(3.0, 0.0, 0.0)], 0.2, &options).unwrap();
    // Samples 0, 1, 2, 3, 3 (the overshooting 4 clamps to 3): dashes [0,1] and [2,3].
    let spheres = node.children().iter().filter(|c| c.tag() == "sphere").count();
    let cylinders = node.children().iter().filter(|c| c.tag() == "cylinder").count();
    assert_eq!(cylinders, 2);
    assert_eq!(spheres, 4);
}

#[test]
fn arrowed_line_without_room_for_arrows_is_plain() {
    let node = arrowed_line(
        &[DVec3::ZERO, DVec3::new(2.0, 0.0, 0.0)],
        0.1,
        &ArrowStyle::new(3.0, 1.0, 0.3),
        false,
    )
    .unwrap();
    assert_eq!(node.children().len(), 1);
    assert_eq!(node.children()[0].tag(), "cylinder");
}
