//! # Texture
//!
//! Pigment, finish and interior modifiers.

use crate::node::Node;
use std::fmt::Display;

pub fn pigment<I: IntoIterator<Item = Node>>(children: I) -> Node {
    Node::block("Pigment").with_children(children)
}

/// `colour <name or vector>`
pub fn colour(value: impl Display) -> Node {
    Node::attribute("Colour", value)
}

pub fn transmit(value: impl Display) -> Node {
    Node::attribute("Transmit", value)
}

pub fn finish<I: IntoIterator<Item = Node>>(children: I) -> Node {
    Node::block("Finish").with_children(children)
}

/// `finish {name}` referring to a declared finish.
pub fn finish_ref(name: impl Display) -> Node {
    Node::block("Finish").with_body(name.to_string())
}

pub fn ambient(value: impl Display) -> Node {
    Node::attribute("Ambient", value)
}

pub fn diffuse(value: impl Display) -> Node {
    Node::attribute("Diffuse", value)
}

pub fn specular(value: impl Display) -> Node {
    Node::attribute("Specular", value)
}

pub fn roughness(value: impl Display) -> Node {
    Node::attribute("Roughness", value)
}

pub fn phong(value: impl Display) -> Node {
    Node::attribute("Phong", value)
}

pub fn phong_size(value: impl Display) -> Node {
    Node::attribute("PhongSize", value)
}

/// `reflection {value}`; further modifiers can be appended as children.
pub fn reflection(value: impl Display) -> Node {
    Node::block("Reflection").with_body(value.to_string())
}

pub fn interior<I: IntoIterator<Item = Node>>(children: I) -> Node {
    Node::block("Interior").with_children(children)
}

pub fn ior(value: impl Display) -> Node {
    Node::attribute("Ior", value)
}
