//! # Serialization Errors
//!
//! Error types for writing a node tree as POV-Ray text.

use crate::diagnostic::Diagnostic;
use thiserror::Error;

/// Errors that abort serialization.
#[derive(Debug, Error)]
pub enum SerializeError {
    /// A childless node has neither a body nor an inline value.
    #[error("Malformed node `{tag}` at {path}: nothing to print")]
    MalformedNode { tag: String, path: String },

    /// The text sink refused a write.
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// The byte sink refused a write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SerializeError {
    /// Creates a malformed node error for `tag` reached via `path`.
    pub fn malformed(tag: impl Into<String>, path: &[&str]) -> Self {
        Self::MalformedNode {
            tag: tag.into(),
            path: path.join(" > "),
        }
    }

    /// Converts the error into a diagnostic for reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let path = match self {
            Self::MalformedNode { path, .. } => path.clone(),
            _ => String::new(),
        };
        Diagnostic::error(self.to_string(), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Severity;

    #[test]
    fn test_malformed_display_names_path() {
        let err = SerializeError::malformed("sphere", &["union", "sphere"]);
        let text = err.to_string();
        assert!(text.contains("`sphere`"));
        assert!(text.contains("union > sphere"));
    }

    #[test]
    fn test_to_diagnostic() {
        let diag = SerializeError::malformed("finish", &["finish"]).to_diagnostic();
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.path, "finish");
    }
}
