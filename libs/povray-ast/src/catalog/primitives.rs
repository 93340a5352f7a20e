//! # Primitives
//!
//! Shapes and CSG combinations.

use crate::node::{Combinator, Node};
use crate::syntax::{pov_vector, PovVector};
use std::fmt::Display;

/// `sphere {<center>, radius}`
///
/// The radius may be symbolic (a macro argument, a declared name).
///
/// # Example
///
/// ```rust
/// use povray_ast::catalog::sphere;
///
/// assert_eq!(sphere(&[1.0, 2.0, 3.0], 0.5).body(), Some("<1,2,3>, 0.5"));
/// assert_eq!(sphere("p", "radius").body(), Some("p, radius"));
/// ```
pub fn sphere<C: PovVector + ?Sized>(center: &C, radius: impl Display) -> Node {
    Node::block("Sphere").with_body(format!("{}, {}", pov_vector(center), radius))
}

/// `cylinder {<base>, <cap>, radius}`
pub fn cylinder<A, B>(base: &A, cap: &B, radius: impl Display) -> Node
where
    A: PovVector + ?Sized,
    B: PovVector + ?Sized,
{
    Node::block("Cylinder").with_body(format!(
        "{}, {}, {}",
        pov_vector(base),
        pov_vector(cap),
        radius
    ))
}

/// `cone {<base>, base_radius, <cap>, cap_radius}`
pub fn cone<A, B>(base: &A, base_radius: impl Display, cap: &B, cap_radius: impl Display) -> Node
where
    A: PovVector + ?Sized,
    B: PovVector + ?Sized,
{
    Node::block("Cone").with_body(format!(
        "{}, {}, {}, {}",
        pov_vector(base),
        base_radius,
        pov_vector(cap),
        cap_radius
    ))
}

pub fn union<I: IntoIterator<Item = Node>>(children: I) -> Node {
    Combinator::Union.with(children)
}

pub fn merge<I: IntoIterator<Item = Node>>(children: I) -> Node {
    Combinator::Merge.with(children)
}

pub fn intersection<I: IntoIterator<Item = Node>>(children: I) -> Node {
    Combinator::Intersection.with(children)
}

pub fn difference<I: IntoIterator<Item = Node>>(children: I) -> Node {
    Combinator::Difference.with(children)
}
