//! Diagnostics reported alongside generated artifacts.
//!
//! The generation pipeline never logs. Anything worth telling the caller —
//! a skipped method, a dropped record, a file that failed to render — is
//! collected as a [`Diagnostic`] and returned next to the output files, so
//! the caller decides how (and whether) to surface it.

use std::fmt;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A record was skipped or degraded; generation continued.
    Warning,
    /// A file failed to generate; the invocation must report failure.
    Error,
}

/// A single message produced during generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity of the message.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
}

impl Diagnostic {
    /// Creates a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    /// Creates an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Returns true for error-severity diagnostics.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Warning => write!(f, "warning: {}", self.message),
            Severity::Error => write!(f, "error: {}", self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_severity_prefix() {
        let warn = Diagnostic::warning("method skipped");
        assert_eq!(warn.to_string(), "warning: method skipped");
        assert!(!warn.is_error());

        let err = Diagnostic::error("file failed");
        assert_eq!(err.to_string(), "error: file failed");
        assert!(err.is_error());
    }
}
