//! # Node Model
//!
//! The universal tree element of a POV-Ray document. A node owns its children
//! exclusively; trees only grow by appending, so they are acyclic by
//! construction.

use crate::diagnostic::Diagnostic;
use crate::error::SerializeError;
use crate::printer;
use crate::syntax::to_snake_case;
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use serde::{Deserialize, Serialize};
use stacker::maybe_grow;
use std::fmt::Display;

// =============================================================================
// SYNTAX KINDS
// =============================================================================

/// Formatting kind of a node, selecting its delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Syntax {
    /// `tag {...}` object or modifier block.
    Block,
    /// CSG combination block; may legally be empty.
    Combinator,
    /// `tag value` key-value line.
    Attribute,
    /// Bare keyword such as `parallel`.
    Flag,
    /// `#declare name = ...;`
    Declaration,
    /// `#macro name(args) ... #end`
    Macro,
    /// `#version 3.7;`
    Statement,
    /// `#include "file"`
    Include,
    /// Top-level scene document; children are written unindented.
    Document,
}

/// Opening and closing strings bracketing a node's payload or children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub open: &'static str,
    pub close: &'static str,
}

impl Syntax {
    /// Delimiter lookup table.
    pub const fn delimiters(self) -> Delimiters {
        let (open, close) = match self {
            Syntax::Block | Syntax::Combinator => (" {", "}"),
            Syntax::Attribute => (" ", ""),
            Syntax::Flag | Syntax::Document => ("", ""),
            Syntax::Declaration => (" = ", ";"),
            Syntax::Macro => ("", "#end"),
            Syntax::Statement => (" ", ";"),
            Syntax::Include => (" \"", "\""),
        };
        Delimiters { open, close }
    }

    /// Payload written for a childless node that has nothing else to print.
    ///
    /// `None` means such a node is malformed.
    pub const fn empty_payload(self) -> Option<&'static str> {
        match self {
            Syntax::Combinator => Some(" "),
            Syntax::Document => Some(""),
            _ => None,
        }
    }

    /// Nesting depth a tree rooted at this kind is serialized from.
    pub const fn root_depth(self) -> i32 {
        match self {
            Syntax::Document => -1,
            _ => 0,
        }
    }
}

// =============================================================================
// COMBINATORS
// =============================================================================

/// The four CSG combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Combinator {
    Union,
    Merge,
    Intersection,
    Difference,
}

impl Combinator {
    /// Type name the POV-Ray keyword is derived from.
    pub const fn name(self) -> &'static str {
        match self {
            Combinator::Union => "Union",
            Combinator::Merge => "Merge",
            Combinator::Intersection => "Intersection",
            Combinator::Difference => "Difference",
        }
    }

    /// Builds the combinator node over `children`.
    pub fn with<I>(self, children: I) -> Node
    where
        I: IntoIterator<Item = Node>,
    {
        Node::combinator(self).with_children(children)
    }
}

// =============================================================================
// NODE
// =============================================================================

/// One construct in a POV-Ray document.
///
/// # Example
///
/// ```rust
/// use povray_ast::{Node, Syntax};
///
/// let mut finish = Node::block("Finish");
/// finish.push(Node::attribute("Ambient", 0.1));
/// finish.push(Node::attribute("PhongSize", 40));
///
/// assert_eq!(finish.tag(), "finish");
/// assert_eq!(finish.children()[1].tag(), "phong_size");
/// assert_eq!(finish.syntax(), Syntax::Block);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    tag: String,
    syntax: Syntax,
    value: Option<String>,
    body: Option<String>,
    children: Vec<Node>,
}

impl Node {
    /// Creates a node with an explicit header.
    pub fn new(tag: impl Into<String>, syntax: Syntax) -> Self {
        Self {
            tag: tag.into(),
            syntax,
            value: None,
            body: None,
            children: Vec::new(),
        }
    }

    /// Creates a block whose keyword is derived from `type_name`.
    pub fn block(type_name: &str) -> Self {
        Self::new(to_snake_case(type_name), Syntax::Block)
    }

    /// Creates a `keyword value` attribute.
    pub fn attribute(type_name: &str, value: impl Display) -> Self {
        Self::new(to_snake_case(type_name), Syntax::Attribute).with_value(value)
    }

    /// Creates a bare keyword.
    pub fn flag(type_name: &str) -> Self {
        Self::new(to_snake_case(type_name), Syntax::Flag).with_value("")
    }

    /// Creates an empty combinator block.
    pub fn combinator(kind: Combinator) -> Self {
        Self::new(to_snake_case(kind.name()), Syntax::Combinator)
    }

    /// Creates an empty top-level document.
    pub fn document() -> Self {
        Self::new("", Syntax::Document)
    }

    /// Sets the kind-specific inline payload.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the inline value of an attribute or flag.
    pub fn with_value(mut self, value: impl Display) -> Self {
        self.value = Some(value.to_string());
        self
    }

    /// Appends one child, builder style.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Appends children in order, builder style.
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        self.children.extend(children);
        self
    }

    /// Appends one child.
    pub fn push(&mut self, child: Node) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Appends children in order.
    pub fn append<I>(&mut self, children: I) -> &mut Self
    where
        I: IntoIterator<Item = Node>,
    {
        self.children.extend(children);
        self
    }

    /// Header written before the payload or children.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Name used for this node in error paths.
    pub fn label(&self) -> &str {
        if self.tag.is_empty() {
            "<document>"
        } else {
            &self.tag
        }
    }

    pub fn syntax(&self) -> Syntax {
        self.syntax
    }

    pub fn delimiters(&self) -> Delimiters {
        self.syntax.delimiters()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// What gets printed inline: the body, or failing that the inline value.
    pub fn payload(&self) -> Option<&str> {
        self.body.as_deref().or(self.value.as_deref())
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Consumes the node, returning its children.
    pub fn into_children(self) -> Vec<Node> {
        self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Collects non-fatal findings for this subtree.
    ///
    /// Currently reports combinators without children, which print as an
    /// empty block.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut found = Vec::new();
        let mut path = Vec::new();
        self.collect_diagnostics(&mut path, &mut found);
        found
    }

    fn collect_diagnostics<'a>(&'a self, path: &mut Vec<&'a str>, found: &mut Vec<Diagnostic>) {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            path.push(self.label());
            if self.syntax == Syntax::Combinator && self.children.is_empty() && self.payload().is_none() {
                found.push(
                    Diagnostic::warning(format!("`{}` has no children", self.tag), path.join(" > "))
                        .with_hint("an empty combinator renders nothing".to_string()),
                );
            }
            for child in &self.children {
                child.collect_diagnostics(path, found);
            }
            path.pop();
        })
    }

    /// Serializes the tree from the depth its root kind expects.
    pub fn to_pov_string(&self) -> Result<String, SerializeError> {
        let mut out = String::new();
        printer::serialize(self, &mut out, self.syntax.root_depth())?;
        Ok(out)
    }
}

impl Extend<Node> for Node {
    fn extend<I: IntoIterator<Item = Node>>(&mut self, iter: I) {
        self.children.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_table() {
        assert_eq!(Syntax::Block.delimiters(), Delimiters { open: " {", close: "}" });
        assert_eq!(Syntax::Attribute.delimiters(), Delimiters { open: " ", close: "" });
        assert_eq!(Syntax::Declaration.delimiters(), Delimiters { open: " = ", close: ";" });
        assert_eq!(Syntax::Macro.delimiters(), Delimiters { open: "", close: "#end" });
    }

    #[test]
    fn test_tags_derive_from_type_names() {
        assert_eq!(Node::block("LightSource").tag(), "light_source");
        assert_eq!(Node::combinator(Combinator::Intersection).tag(), "intersection");
        assert_eq!(Node::flag("Shadowless").tag(), "shadowless");
    }

    #[test]
    fn test_push_preserves_insertion_order() {
        let mut node = Node::block("Pigment");
        node.push(Node::attribute("Colour", "Red"))
            .push(Node::attribute("Transmit", 0.5));
        node.append([Node::flag("Parallel")]);
        node.extend([Node::flag("Shadowless")]);

        let tags: Vec<&str> = node.children().iter().map(Node::tag).collect();
        assert_eq!(tags, ["colour", "transmit", "parallel", "shadowless"]);
    }

    #[test]
    fn test_payload_prefers_body() {
        let node = Node::new("x", Syntax::Block).with_value("v").with_body("b");
        assert_eq!(node.payload(), Some("b"));
        assert_eq!(Node::attribute("Ior", 1.5).payload(), Some("1.5"));
        assert_eq!(Node::block("Finish").payload(), None);
    }

    #[test]
    fn test_diagnostics_report_empty_combinators() {
        let tree = Combinator::Union.with([Node::combinator(Combinator::Merge)]);
        let found = tree.diagnostics();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path, "union > merge");
    }

    #[test]
    fn test_diagnostics_walk_deep_trees() {
        let mut tree = Node::combinator(Combinator::Merge);
        for _ in 0..2000 {
            tree = Combinator::Union.with([tree]);
        }
        let found = tree.diagnostics();
        assert_eq!(found.len(), 1);
        assert!(found[0].path.starts_with("union > union > "));
        assert!(found[0].path.ends_with(" > merge"));
    }

    #[test]
    fn test_document_label() {
        assert_eq!(Node::document().label(), "<document>");
        assert_eq!(Node::document().syntax().root_depth(), -1);
    }
}
