//! # Literal Formatting
//!
//! Conversions from Rust values to POV-Ray literals, and from Rust-style type
//! names to POV-Ray keywords.

use glam::{DVec2, DVec3, Vec3};
use std::fmt::Display;

/// Converts a PascalCase or camelCase identifier to snake_case.
///
/// An underscore is inserted between a lowercase letter and a following
/// uppercase letter, and between two adjacent uppercase letters; the result is
/// lowercased. Digits and underscores pass through untouched, so the
/// conversion is idempotent on names that are already snake_case.
///
/// # Examples
///
/// ```rust
/// use povray_ast::to_snake_case;
///
/// assert_eq!(to_snake_case("LightSource"), "light_source");
/// assert_eq!(to_snake_case("myStringInitiallyInCamelCase"), "my_string_initially_in_camel_case");
/// assert_eq!(to_snake_case("Mesh2"), "mesh2");
/// assert_eq!(to_snake_case("phong_size"), "phong_size");
/// ```
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + name.len() / 2);
    let mut previous: Option<char> = None;

    for ch in name.chars() {
        if ch.is_ascii_uppercase() && previous.is_some_and(|p| p.is_ascii_alphabetic()) {
            out.push('_');
        }
        out.push(ch.to_ascii_lowercase());
        previous = Some(ch);
    }

    out
}

/// A value that can be written as a POV-Ray vector literal.
///
/// Numeric sequences render as `<v0,v1,...>` without whitespace. Strings are
/// symbolic references to declared identifiers and pass through unchanged.
pub trait PovVector {
    /// Renders the literal.
    fn to_pov_vector(&self) -> String;
}

/// Renders any [`PovVector`] value.
///
/// # Examples
///
/// ```rust
/// use povray_ast::pov_vector;
///
/// assert_eq!(pov_vector(&[1.0, 2.5, -3.0]), "<1,2.5,-3>");
/// assert_eq!(pov_vector("cameraPos"), "cameraPos");
/// ```
pub fn pov_vector<V: PovVector + ?Sized>(value: &V) -> String {
    value.to_pov_vector()
}

fn join_components<T: Display>(components: &[T]) -> String {
    let parts: Vec<String> = components.iter().map(ToString::to_string).collect();
    format!("<{}>", parts.join(","))
}

impl PovVector for str {
    fn to_pov_vector(&self) -> String {
        self.to_string()
    }
}

impl PovVector for String {
    fn to_pov_vector(&self) -> String {
        self.clone()
    }
}

impl<T: Display> PovVector for [T] {
    fn to_pov_vector(&self) -> String {
        join_components(self)
    }
}

impl<T: Display, const N: usize> PovVector for [T; N] {
    fn to_pov_vector(&self) -> String {
        join_components(self)
    }
}

impl<T: Display> PovVector for Vec<T> {
    fn to_pov_vector(&self) -> String {
        join_components(self)
    }
}

impl PovVector for DVec3 {
    fn to_pov_vector(&self) -> String {
        join_components(&self.to_array())
    }
}

impl PovVector for DVec2 {
    fn to_pov_vector(&self) -> String {
        join_components(&self.to_array())
    }
}

impl PovVector for Vec3 {
    fn to_pov_vector(&self) -> String {
        join_components(&self.to_array())
    }
}

impl<V: PovVector + ?Sized> PovVector for &V {
    fn to_pov_vector(&self) -> String {
        (**self).to_pov_vector()
    }
}
