//! # Printer
//!
//! Recursive, indentation-aware writer turning a [`Node`] tree into POV-Ray
//! text.
//!
//! ## Layout
//!
//! ```text
//! leaf:   <indent><tag><open><payload><close>
//! block:  <indent><tag><open>
//!         <indent+1><payload>        (only when a payload exists)
//!         <child at depth+1>...
//!         <indent><close>
//! ```

use crate::error::SerializeError;
use crate::node::Node;
use config::constants::{indent, STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use stacker::maybe_grow;
use std::fmt::Write;

/// Writes `node` and its subtree to `sink`, starting at nesting `depth`.
///
/// # Example
///
/// ```rust
/// use povray_ast::{catalog::sphere, serialize};
///
/// let mut out = String::new();
/// serialize(&sphere(&[1.0, 2.0, 3.0], 0.5), &mut out, 1).unwrap();
/// assert_eq!(out, "  sphere {<1,2,3>, 0.5}");
/// ```
pub fn serialize<W: Write>(node: &Node, sink: &mut W, depth: i32) -> Result<(), SerializeError> {
    let mut path = Vec::new();
    write_node(node, sink, depth, &mut path)
}

/// Serializes `node` from its root depth into a byte sink.
pub fn write_to<W: std::io::Write>(node: &Node, sink: &mut W) -> Result<(), SerializeError> {
    let text = node.to_pov_string()?;
    sink.write_all(text.as_bytes())?;
    Ok(())
}

fn write_node<'a, W: Write>(
    node: &'a Node,
    sink: &mut W,
    depth: i32,
    path: &mut Vec<&'a str>,
) -> Result<(), SerializeError> {
    maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
        path.push(node.label());
        let prefix = indent(depth);
        let delimiters = node.delimiters();

        sink.write_str(&prefix)?;
        sink.write_str(node.tag())?;

        if node.is_leaf() {
            let payload = match node.payload() {
                Some(payload) => payload,
                None => match node.syntax().empty_payload() {
                    Some(filler) => {
                        if !filler.is_empty() {
                            log::warn!("serializing empty `{}` at {}", node.tag(), path.join(" > "));
                        }
                        filler
                    }
                    None => return Err(SerializeError::malformed(node.label(), path)),
                },
            };
            write!(sink, "{}{}{}", delimiters.open, payload, delimiters.close)?;
        } else {
            sink.write_str(delimiters.open.trim_end())?;
            if let Some(payload) = node.payload() {
                write!(sink, "\n{}{}", indent(depth + 1), payload)?;
            }
            for child in node.children() {
                sink.write_char('\n')?;
                write_node(child, sink, depth + 1, path)?;
            }
            write!(sink, "\n{}{}", prefix, delimiters.close)?;
        }

        path.pop();
        Ok(())
    })
}
