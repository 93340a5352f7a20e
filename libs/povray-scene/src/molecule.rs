//! # Molecule Models
//!
//! Ball-and-stick renderings of particle configurations: one sphere per
//! particle and one stick (a short [`line`]) per bonded pair.
//!
//! ## Scene preset
//!
//! [`molecule_scene`] wraps a model into a ready-to-render scene. The camera
//! looks at the origin from a random direction, far enough away to frame
//! every particle, with a parallel shadowless light travelling along the
//! line of sight.

use crate::camera::{Camera, LightSource, Projection};
use crate::error::SceneError;
use crate::scene::Scene;
use config::constants::{
    SceneConfig, DEFAULT_BALL_ALPHA, DEFAULT_BALL_COLOUR, DEFAULT_BALL_RADIUS, DEFAULT_BOND_THRESHOLD,
    DEFAULT_CAMERA_DISTANCE, DEFAULT_STICK_COLOUR, DEFAULT_STICK_RADIUS,
};
use glam::DVec3;
use povray_ast::catalog::{
    ambient, colour, declare, declare_value, diffuse, finish, finish_ref, merge, phong, phong_size, pigment,
    reflection, sphere, transmit, union,
};
use povray_ast::{pov_vector, Node};
use povray_lines::{line, LineOptions};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

const CAMERA_POSITION: &str = "cameraPos";
const FOCUS_POSITION: &str = "focusPos";
const BALL_FINISH: &str = "ballFinish";
const STICK_FINISH: &str = "stickFinish";

// =============================================================================
// BONDS
// =============================================================================

/// Which particle pairs get a stick.
#[derive(Debug, Clone, PartialEq)]
pub enum Bonds {
    /// Every pair closer than the given distance.
    Within(f64),
    /// Explicit index pairs; order within a pair does not matter.
    Explicit(Vec<(usize, usize)>),
}

impl Default for Bonds {
    fn default() -> Self {
        Bonds::Within(DEFAULT_BOND_THRESHOLD)
    }
}

/// Pairs `(i, j)` with `i < j` whose distance is below `threshold`, in
/// row-major order.
pub fn bonds_within(coordinates: &[DVec3], threshold: f64) -> Vec<(usize, usize)> {
    let mut bonds = Vec::new();
    for (i, a) in coordinates.iter().enumerate() {
        for (j, b) in coordinates.iter().enumerate().skip(i + 1) {
            if a.distance(*b) < threshold {
                bonds.push((i, j));
            }
        }
    }
    bonds
}

impl Bonds {
    /// Normalized `(i, j)` pairs with `i < j`, sorted and deduplicated.
    pub fn resolve(&self, coordinates: &[DVec3]) -> Result<Vec<(usize, usize)>, SceneError> {
        let mut bonds = match self {
            Bonds::Within(threshold) => bonds_within(coordinates, *threshold),
            Bonds::Explicit(pairs) => {
                let n = coordinates.len();
                if let Some(&(i, j)) = pairs.iter().find(|&&(i, j)| i >= n || j >= n || i == j) {
                    return Err(SceneError::invalid_coordinates(format!(
                        "bond ({i}, {j}) does not join two of the {n} particles"
                    )));
                }
                pairs.iter().map(|&(i, j)| (i.min(j), i.max(j))).collect()
            }
        };
        bonds.sort_unstable();
        bonds.dedup();

        if bonds.is_empty() {
            return Err(SceneError::NoBonds);
        }
        Ok(bonds)
    }
}

// =============================================================================
// BALL AND STICK
// =============================================================================

/// A `union` of two `merge`s: the balls, then the sticks.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use povray_scene::{ball_and_stick, Bonds};
///
/// let water = [DVec3::ZERO, DVec3::new(0.96, 0.0, 0.0), DVec3::new(-0.24, 0.93, 0.0)];
/// let model = ball_and_stick(&water, 0.3, 0.05, &Bonds::default()).unwrap();
/// assert_eq!(model.tag(), "union");
/// assert_eq!(model.children()[0].children().len(), 3);
/// assert_eq!(model.children()[1].children().len(), 2);
/// ```
pub fn ball_and_stick(
    coordinates: &[DVec3],
    ball_radius: f64,
    stick_radius: f64,
    bonds: &Bonds,
) -> Result<Node, SceneError> {
    let (balls, sticks) = balls_and_sticks(coordinates, ball_radius, stick_radius, bonds)?;
    Ok(union([balls, sticks]))
}

fn balls_and_sticks(
    coordinates: &[DVec3],
    ball_radius: f64,
    stick_radius: f64,
    bonds: &Bonds,
) -> Result<(Node, Node), SceneError> {
    check_coordinates(coordinates)?;
    let bonds = bonds.resolve(coordinates)?;

    let balls = merge(coordinates.iter().map(|x| sphere(x, ball_radius)));

    let stick_style = LineOptions::default();
    let sticks = bonds
        .iter()
        .map(|&(i, j)| line(&[coordinates[i], coordinates[j]], stick_radius, &stick_style))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!(
        "ball-and-stick model with {} particles and {} bonds",
        coordinates.len(),
        bonds.len()
    );
    Ok((balls, merge(sticks)))
}

fn check_coordinates(coordinates: &[DVec3]) -> Result<(), SceneError> {
    if coordinates.is_empty() {
        return Err(SceneError::invalid_coordinates("no particles given"));
    }
    if let Some(i) = coordinates.iter().position(|x| !x.is_finite()) {
        return Err(SceneError::invalid_coordinates(format!(
            "particle {i} has non-finite coordinates"
        )));
    }
    Ok(())
}

// =============================================================================
// SCENE PRESET
// =============================================================================

/// Appearance and framing of a [`molecule_scene`].
#[derive(Debug, Clone, PartialEq)]
pub struct MoleculeOptions {
    pub ball_radius: f64,
    pub stick_radius: f64,
    pub projection: Projection,
    /// Camera distance in units of the farthest particle's distance from
    /// the origin.
    pub camera_distance: f64,
    pub ball_colour: String,
    /// Transmittance of the balls, so sticks show through.
    pub ball_alpha: f64,
    pub stick_colour: String,
    pub bonds: Bonds,
    pub scene: SceneConfig,
}

impl Default for MoleculeOptions {
    fn default() -> Self {
        Self {
            ball_radius: DEFAULT_BALL_RADIUS,
            stick_radius: DEFAULT_STICK_RADIUS,
            projection: Projection::Perspective,
            camera_distance: DEFAULT_CAMERA_DISTANCE,
            ball_colour: DEFAULT_BALL_COLOUR.to_string(),
            ball_alpha: DEFAULT_BALL_ALPHA,
            stick_colour: DEFAULT_STICK_COLOUR.to_string(),
            bonds: Bonds::default(),
            scene: SceneConfig::default(),
        }
    }
}

/// Builds a complete scene around a ball-and-stick model.
///
/// Besides the model the scene declares `ballFinish`, `stickFinish`,
/// `cameraPos` and `focusPos`. The camera and sky directions are drawn from
/// `rng`, so a seeded generator reproduces the same scene.
pub fn molecule_scene<R: Rng + ?Sized>(
    coordinates: &[DVec3],
    options: &MoleculeOptions,
    rng: &mut R,
) -> Result<Scene, SceneError> {
    let mut scene = Scene::new(&options.scene)?;
    let (mut balls, mut sticks) =
        balls_and_sticks(coordinates, options.ball_radius, options.stick_radius, &options.bonds)?;

    balls.append([
        pigment([colour(&options.ball_colour), transmit(options.ball_alpha)]),
        finish_ref(BALL_FINISH),
    ]);
    sticks.append([pigment([colour(&options.stick_colour)]), finish_ref(STICK_FINISH)]);

    let max_distance = coordinates.iter().map(|x| x.length()).fold(0.0, f64::max);
    let camera_position = random_direction(rng) * options.camera_distance * max_distance;
    let focus_position = DVec3::ZERO;

    let (right, up) = match options.projection {
        Projection::Perspective => (DVec3::X, DVec3::Y),
        Projection::Orthographic => {
            let scale = options.camera_distance * extent(coordinates);
            (DVec3::X * scale, DVec3::Y * scale)
        }
    };
    let camera = Camera::new(options.projection)
        .location(CAMERA_POSITION)
        .look_at(FOCUS_POSITION)
        .sky(&random_direction(rng))
        .right(&right)
        .up(&up);
    let light = LightSource::new(CAMERA_POSITION)
        .colour("White")
        .parallel(FOCUS_POSITION)
        .shadowless();

    scene.append([
        declare(BALL_FINISH, ball_finish()),
        declare(STICK_FINISH, stick_finish()),
        declare_value(CAMERA_POSITION, pov_vector(&camera_position)),
        declare_value(FOCUS_POSITION, pov_vector(&focus_position)),
        camera.into(),
        light.into(),
        balls,
        sticks,
    ]);
    Ok(scene)
}

fn ball_finish() -> Node {
    finish([ambient(0.1), diffuse(0.6), phong(0.1), phong_size(40), reflection(0.1)])
}

fn stick_finish() -> Node {
    finish([ambient(0.1), diffuse(0.8), phong(0.1), phong_size(40)])
}

/// Unit vector with components drawn uniformly from `[0, 1)`.
fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> DVec3 {
    let component = Uniform::new(0.0, 1.0);
    loop {
        let v = DVec3::new(
            component.sample(rng),
            component.sample(rng),
            component.sample(rng),
        );
        if let Some(direction) = v.try_normalize() {
            return direction;
        }
    }
}

/// Largest side of the axis-aligned bounding box.
fn extent(coordinates: &[DVec3]) -> f64 {
    let (min, max) = coordinates.iter().fold(
        (DVec3::splat(f64::INFINITY), DVec3::splat(f64::NEG_INFINITY)),
        |(min, max), x| (min.min(*x), max.max(*x)),
    );
    (max - min).max_element()
}
