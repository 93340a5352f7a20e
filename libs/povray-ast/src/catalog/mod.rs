//! # Catalog
//!
//! Typed constructors for the POV-Ray constructs the builders emit. Each one
//! returns a plain [`Node`](crate::Node); callers append further children
//! (pigments, finishes, transforms) with [`Node::push`](crate::Node::push).

pub mod directives;
pub mod primitives;
pub mod texture;

pub use directives::*;
pub use primitives::*;
pub use texture::*;
