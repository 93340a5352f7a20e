//! # POV-Ray Scene
//!
//! Complete scene documents: the header (`#version`, includes, global
//! settings), cameras and light sources, and ball-and-stick molecule models.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::SceneConfig;
//! use povray_ast::catalog::sphere;
//! use povray_scene::{Camera, LightSource, Scene};
//!
//! let mut scene = Scene::new(&SceneConfig::default()).unwrap();
//! scene
//!     .push(Camera::default().location(&[0.0, 0.0, -5.0]).look_at(&[0.0, 0.0, 0.0]))
//!     .push(LightSource::new(&[10.0, 10.0, -10.0]).colour("White"))
//!     .push(sphere(&[0.0, 0.0, 0.0], 1));
//!
//! let text = scene.to_pov_string().unwrap();
//! assert!(text.starts_with("\n#version 3.7;\n"));
//! assert!(text.ends_with("sphere {<0,0,0>, 1}\n"));
//! ```

pub mod camera;
pub mod error;
pub mod molecule;
pub mod scene;

pub use camera::{Camera, LightSource, Projection};
pub use error::SceneError;
pub use molecule::{ball_and_stick, bonds_within, molecule_scene, Bonds, MoleculeOptions};
pub use scene::Scene;
