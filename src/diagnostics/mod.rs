//! Developer diagnostics for tooltip configuration
//!
//! Diagnostics report caller mistakes that the tooltip recovers from on its
//! own (for example, supplying both literal text and custom content). They
//! never stop rendering; each one is logged as a warning when recorded and
//! kept on the instance so tests and devtools can inspect it.

use serde::{Deserialize, Serialize};

/// Severity level for diagnostics
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Warning,
    Info,
}

/// A single diagnostic about an instance's configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Severity level
    pub severity: DiagnosticSeverity,
    /// Kind identifier (e.g., "content_conflict")
    pub kind: String,
    /// Human-readable message
    pub message: String,
}

impl Diagnostic {
    pub fn new(
        severity: DiagnosticSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Both `text` and a render callback were supplied
    pub fn content_conflict() -> Self {
        Self::new(
            DiagnosticSeverity::Warning,
            "content_conflict",
            "Tooltip received both `text` and `renderContent`; `text` is ignored",
        )
    }
}

/// Diagnostics recorded for one tooltip instance
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Diagnostics {
    pub entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Record and log a diagnostic
    pub fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            DiagnosticSeverity::Warning => log::warn!("[tooltip] {}", diagnostic.message),
            DiagnosticSeverity::Info => log::info!("[tooltip] {}", diagnostic.message),
        }
        self.entries.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count diagnostics of one kind
    pub fn count_kind(&self, kind: &str) -> usize {
        self.entries.iter().filter(|d| d.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_conflict_diagnostic() {
        let diagnostic = Diagnostic::content_conflict();
        assert_eq!(diagnostic.severity, DiagnosticSeverity::Warning);
        assert_eq!(diagnostic.kind, "content_conflict");
    }

    #[test]
    fn test_report_and_count() {
        let mut diags = Diagnostics::new();
        assert!(diags.is_empty());

        diags.report(Diagnostic::content_conflict());
        diags.report(Diagnostic::new(DiagnosticSeverity::Info, "note", "Note"));

        assert_eq!(diags.len(), 2);
        assert_eq!(diags.count_kind("content_conflict"), 1);
    }
}
