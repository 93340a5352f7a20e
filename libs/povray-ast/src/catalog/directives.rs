//! # Directives
//!
//! Language directives: declarations, macros, version and include lines.
//! Their headers carry a name, so tags are built explicitly instead of being
//! derived from a type name.

use crate::node::{Node, Syntax};
use std::fmt::Display;

/// `#declare name = <definition>;`
///
/// # Example
///
/// ```rust
/// use povray_ast::catalog::{ambient, declare, finish};
///
/// let text = declare("dull", finish([ambient(0.1)])).to_pov_string().unwrap();
/// assert_eq!(text, "#declare dull =\n  finish {\n    ambient 0.1\n  }\n;");
/// ```
pub fn declare(name: impl Display, definition: Node) -> Node {
    Node::new(format!("#declare {name}"), Syntax::Declaration).with_child(definition)
}

/// `#declare name = value;` for literal values such as vectors.
pub fn declare_value(name: impl Display, value: impl Display) -> Node {
    Node::new(format!("#declare {name}"), Syntax::Declaration).with_value(value)
}

/// `#local name = <definition>;`
pub fn local(name: impl Display, definition: Node) -> Node {
    Node::new(format!("#local {name}"), Syntax::Declaration).with_child(definition)
}

/// `#local name = value;`
pub fn local_value(name: impl Display, value: impl Display) -> Node {
    Node::new(format!("#local {name}"), Syntax::Declaration).with_value(value)
}

/// `#macro name(arg, ...)` followed by `body` and `#end`.
pub fn macro_def<I, S>(name: impl Display, arguments: &[S], body: I) -> Node
where
    I: IntoIterator<Item = Node>,
    S: AsRef<str>,
{
    let arguments: Vec<&str> = arguments.iter().map(|a| a.as_ref()).collect();
    Node::new(format!("#macro {name}({})", arguments.join(",")), Syntax::Macro).with_children(body)
}

/// `#version 3.7;`
pub fn version(value: f64) -> Node {
    Node::new("#version", Syntax::Statement).with_value(value)
}

/// `#include "file"`
pub fn include(file: impl Display) -> Node {
    Node::new("#include", Syntax::Include).with_value(file)
}
