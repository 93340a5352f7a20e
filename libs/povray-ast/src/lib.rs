//! # POV-Ray AST Crate
//!
//! In-memory document tree for POV-Ray scene descriptions and the recursive
//! serializer that turns it into scene text.
//!
//! ## Architecture
//!
//! ```text
//! catalog constructors → Node tree → printer::serialize → POV-Ray text
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use povray_ast::catalog::{colour, pigment, sphere, union};
//!
//! let mut shapes = union([sphere(&[1.0, 2.0, 3.0], 0.5)]);
//! shapes.push(pigment([colour("White")]));
//!
//! let text = shapes.to_pov_string().unwrap();
//! assert!(text.starts_with("union {\n  sphere {<1,2,3>, 0.5}"));
//! ```
//!
//! ## Design Principles
//!
//! - **One node type**: every construct is a [`Node`]; its [`Syntax`] selects
//!   delimiters from a single lookup table
//! - **Explicit payloads**: bodies and inline values are `Option<String>`,
//!   checked before use
//! - **Fail loudly**: a node with nothing to print aborts serialization with
//!   the tag path leading to it

pub mod catalog;
pub mod diagnostic;
pub mod error;
pub mod node;
pub mod printer;
pub mod syntax;

// Re-exports for convenience
pub use diagnostic::{Diagnostic, Severity};
pub use error::SerializeError;
pub use node::{Combinator, Delimiters, Node, Syntax};
pub use printer::{serialize, write_to};
pub use syntax::{pov_vector, to_snake_case, PovVector};
