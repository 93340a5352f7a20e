//! # Camera and Lights
//!
//! Builders for `camera` and `light_source` blocks. Vectors are stored
//! already rendered, so declared identifiers such as `cameraPos` can be used
//! wherever a vector is expected.

use povray_ast::{pov_vector, Node, PovVector};
use std::fmt::Display;

// =============================================================================
// CAMERA
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Projection {
    #[default]
    Perspective,
    Orthographic,
}

impl Projection {
    pub fn keyword(self) -> &'static str {
        match self {
            Projection::Perspective => "perspective",
            Projection::Orthographic => "orthographic",
        }
    }
}

/// A camera block; unset vectors are left to POV-Ray's defaults.
///
/// # Example
///
/// ```rust
/// use povray_scene::Camera;
///
/// let text = Camera::default()
///     .location(&[0.0, 0.0, -5.0])
///     .look_at("focusPos")
///     .to_node()
///     .to_pov_string()
///     .unwrap();
/// assert_eq!(text, "camera {\n  perspective\n  location <0,0,-5>\n  look_at focusPos\n}");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Camera {
    projection: Projection,
    location: Option<String>,
    look_at: Option<String>,
    sky: Option<String>,
    right: Option<String>,
    up: Option<String>,
}

impl Camera {
    pub fn new(projection: Projection) -> Self {
        Self {
            projection,
            ..Self::default()
        }
    }

    pub fn location<V: PovVector + ?Sized>(mut self, position: &V) -> Self {
        self.location = Some(pov_vector(position));
        self
    }

    pub fn look_at<V: PovVector + ?Sized>(mut self, target: &V) -> Self {
        self.look_at = Some(pov_vector(target));
        self
    }

    /// Direction considered "up" in the rendered image.
    pub fn sky<V: PovVector + ?Sized>(mut self, direction: &V) -> Self {
        self.sky = Some(pov_vector(direction));
        self
    }

    pub fn right<V: PovVector + ?Sized>(mut self, direction: &V) -> Self {
        self.right = Some(pov_vector(direction));
        self
    }

    pub fn up<V: PovVector + ?Sized>(mut self, direction: &V) -> Self {
        self.up = Some(pov_vector(direction));
        self
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn to_node(&self) -> Node {
        let mut node = Node::block("Camera").with_child(Node::flag(self.projection.keyword()));
        let vectors = [
            ("Location", &self.location),
            ("LookAt", &self.look_at),
            ("Sky", &self.sky),
            ("Right", &self.right),
            ("Up", &self.up),
        ];
        for (name, value) in vectors {
            if let Some(value) = value {
                node.push(Node::attribute(name, value));
            }
        }
        node
    }
}

impl From<Camera> for Node {
    fn from(camera: Camera) -> Self {
        camera.to_node()
    }
}

// =============================================================================
// LIGHT SOURCE
// =============================================================================

/// `light_source {<position> ...}`
#[derive(Debug, Clone, PartialEq)]
pub struct LightSource {
    position: String,
    colour: Option<String>,
    parallel: bool,
    point_at: Option<String>,
    shadowless: bool,
}

impl LightSource {
    pub fn new<V: PovVector + ?Sized>(position: &V) -> Self {
        Self {
            position: pov_vector(position),
            colour: None,
            parallel: false,
            point_at: None,
            shadowless: false,
        }
    }

    pub fn colour(mut self, colour: impl Display) -> Self {
        self.colour = Some(colour.to_string());
        self
    }

    /// Parallel rays aimed from the position towards `target`.
    pub fn parallel<V: PovVector + ?Sized>(mut self, target: &V) -> Self {
        self.parallel = true;
        self.point_at = Some(pov_vector(target));
        self
    }

    /// Aims the light without making it parallel (spotlights).
    pub fn point_at<V: PovVector + ?Sized>(mut self, target: &V) -> Self {
        self.point_at = Some(pov_vector(target));
        self
    }

    pub fn shadowless(mut self) -> Self {
        self.shadowless = true;
        self
    }

    pub fn to_node(&self) -> Node {
        let mut node = Node::block("LightSource").with_body(self.position.clone());
        if let Some(colour) = &self.colour {
            node.push(Node::attribute("Colour", colour));
        }
        if self.parallel {
            node.push(Node::flag("Parallel"));
        }
        if let Some(target) = &self.point_at {
            node.push(Node::attribute("PointAt", target));
        }
        if self.shadowless {
            node.push(Node::flag("Shadowless"));
        }
        node
    }
}

impl From<LightSource> for Node {
    fn from(light: LightSource) -> Self {
        light.to_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_orthographic_camera_layout() {
        let camera = Camera::new(Projection::Orthographic)
            .location(&DVec3::new(0.0, 0.0, -10.0))
            .look_at(&DVec3::ZERO)
            .sky(&DVec3::Z)
            .right(&DVec3::X)
            .up(&DVec3::Y);
        let expected = "\
camera {
  orthographic
  location <0,0,-10>
  look_at <0,0,0>
  sky <0,0,1>
  right <1,0,0>
  up <0,1,0>
}";
        assert_eq!(camera.to_node().to_pov_string().unwrap(), expected);
    }

    #[test]
    fn test_light_source_layout() {
        let light = LightSource::new("cameraPos")
            .colour("White")
            .parallel("focusPos")
            .shadowless();
        let expected = "\
light_source {
  cameraPos
  colour White
  parallel
  point_at focusPos
  shadowless
}";
        assert_eq!(light.to_node().to_pov_string().unwrap(), expected);
    }

    #[test]
    fn test_bare_light_is_one_line() {
        let node: Node = LightSource::new(&[1.0, 2.0, 3.0]).into();
        assert_eq!(node.to_pov_string().unwrap(), "light_source {<1,2,3>}");
    }
}
