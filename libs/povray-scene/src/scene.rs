//! # Scene Document
//!
//! The top-level node of a `.pov` file. A fresh scene already carries the
//! header every render needs:
//!
//! ```text
//! #version 3.7;
//! #include "shapes.inc"
//! #include "colors.inc"
//! global_settings {
//!   assumed_gamma 2.2
//!   max_trace_level 256
//!   ambient_light White
//! }
//! ```
//!
//! Objects appended afterwards follow in insertion order.

use crate::error::SceneError;
use config::constants::SceneConfig;
use povray_ast::catalog::{include, version};
use povray_ast::{Node, SerializeError};

/// A scene document under construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    document: Node,
}

impl Scene {
    /// Starts a scene with the header described by `config`.
    pub fn new(config: &SceneConfig) -> Result<Self, SceneError> {
        config.validate()?;
        Ok(Self::with_header(config))
    }

    fn with_header(config: &SceneConfig) -> Self {
        let mut document = Node::document();
        document.push(version(config.version));
        document.append(config.includes.iter().map(|file| include(file)));
        document.push(global_settings(config));
        Self { document }
    }

    pub fn push(&mut self, node: impl Into<Node>) -> &mut Self {
        self.document.push(node.into());
        self
    }

    pub fn append<I: IntoIterator<Item = Node>>(&mut self, nodes: I) -> &mut Self {
        self.document.append(nodes);
        self
    }

    pub fn document(&self) -> &Node {
        &self.document
    }

    pub fn into_node(self) -> Node {
        self.document
    }

    /// Renders the whole document.
    pub fn to_pov_string(&self) -> Result<String, SerializeError> {
        self.document.to_pov_string()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::with_header(&SceneConfig::default())
    }
}

impl From<Scene> for Node {
    fn from(scene: Scene) -> Self {
        scene.into_node()
    }
}

fn global_settings(config: &SceneConfig) -> Node {
    Node::block("GlobalSettings").with_children([
        Node::attribute("AssumedGamma", config.assumed_gamma),
        Node::attribute("MaxTraceLevel", config.max_trace_level),
        Node::attribute("AmbientLight", &config.ambient_light),
    ])
}
