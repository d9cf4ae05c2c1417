//! Collected diagnostics for a conversion run
//!
//! Per-symbol failures do not abort the batch: they are recorded here and
//! surfaced to the caller, which reports success only when the list is empty.

use crate::error::ConvertError;

/// Severity of a collected diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
        }
    }
}

/// A diagnostic recorded while converting one symbol (or the batch itself).
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Severity of the diagnostic
    pub severity: Severity,
    /// Short machine-readable tag (e.g. "structural", "classification")
    pub kind: String,
    /// The symbol href this diagnostic belongs to, if any
    pub symbol: Option<String>,
    /// Human-readable message
    pub message: String,
}

impl Diagnostic {
    /// Record a conversion error against a symbol.
    pub fn error(symbol: impl Into<String>, error: &ConvertError) -> Self {
        Self {
            severity: Severity::Error,
            kind: error.kind().to_string(),
            symbol: Some(symbol.into()),
            message: error.to_string(),
        }
    }

    /// Record a warning against a symbol.
    pub fn warning(symbol: impl Into<String>, kind: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            kind: kind.to_string(),
            symbol: Some(symbol.into()),
            message: message.into(),
        }
    }

    /// Record a batch-level diagnostic not tied to a symbol.
    pub fn batch(error: &ConvertError) -> Self {
        Self {
            severity: Severity::Error,
            kind: error.kind().to_string(),
            symbol: None,
            message: error.to_string(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.symbol {
            Some(symbol) => write!(f, "{} [{}] {}: {}", self.severity, self.kind, symbol, self.message),
            None => write!(f, "{} [{}] {}", self.severity, self.kind, self.message),
        }
    }
}

/// Returns true when any diagnostic in the list is an error.
pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(|d| d.severity == Severity::Error)
}
