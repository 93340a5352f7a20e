use serde::{Deserialize, Serialize};

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

/// A diagnostic message with severity and the tag path of the node it concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// Tags from the root down to the node, joined with ` > `.
    pub path: String,
    pub hint: Option<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: String, path: String) -> Self {
        Self {
            severity,
            message,
            path,
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: String) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn error(message: String, path: String) -> Self {
        Self::new(Severity::Error, message, path)
    }

    pub fn warning(message: String, path: String) -> Self {
        Self::new(Severity::Warning, message, path)
    }
}
