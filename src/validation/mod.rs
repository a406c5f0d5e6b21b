//! Validation for scene definitions.
//!
//! Runs a suite of checks against a parsed scene and reports errors and
//! warnings without touching a surface. Used by `rast validate` and
//! `rast render --check`. Errors are conditions the draw operations
//! would reject outright; warnings flag legal-but-suspect geometry, like a
//! circle whose radius will be clipped at the surface edge.

mod checks;

use std::fmt;

use crate::output::Printer;
use crate::scene::SceneDef;

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single validation diagnostic.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,
    /// Machine-readable diagnostic code (e.g. "rast::validate::out-of-bounds").
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Optional help text suggesting how to fix the issue.
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code: code.into(),
            message: message.into(),
            help: None,
        }
    }

    /// Create a warning diagnostic.
    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.into(),
            message: message.into(),
            help: None,
        }
    }

    /// Add help text to this diagnostic.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Collects diagnostics from validation checks.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Count errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    /// Count warnings.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// Check if there are no diagnostics at all.
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// Iterate over diagnostics.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}

/// Run all validation checks against a scene.
pub fn validate_scene(scene: &SceneDef) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_dimensions(scene));
    result.merge(checks::check_colours(scene));
    result.merge(checks::check_bounds(scene));
    result.merge(checks::check_rectangle_corners(scene));
    result.merge(checks::check_circles(scene));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let is_error = d.severity == Severity::Error;
        let label = printer.severity(&d.severity.to_string(), is_error);
        eprintln!("  {}[{}]: {}", label, printer.dim(&d.code), d.message);
        if let Some(help) = &d.help {
            eprintln!("    help: {}", help);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneDef;

    fn scene(yaml: &str) -> SceneDef {
        SceneDef::from_yaml(yaml).unwrap()
    }

    #[test]
    fn test_empty_result() {
        let result = ValidationResult::new();
        assert!(result.is_ok());
        assert!(!result.has_errors());
        assert_eq!(result.error_count(), 0);
        assert_eq!(result.warning_count(), 0);
    }

    #[test]
    fn test_merge() {
        let mut a = ValidationResult::new();
        a.push(Diagnostic::error("rast::a", "error a"));

        let mut b = ValidationResult::new();
        b.push(Diagnostic::warning("rast::b", "warning b"));

        a.merge(b);
        assert_eq!(a.error_count(), 1);
        assert_eq!(a.warning_count(), 1);
    }

    #[test]
    fn test_diagnostic_with_help() {
        let d = Diagnostic::error("rast::test", "bad colour").with_help("pick a palette name");
        assert_eq!(d.help.as_deref(), Some("pick a palette name"));
    }

    #[test]
    fn test_validate_clean_scene() {
        let result = validate_scene(&scene(
            "width: 32\nheight: 32\nshapes:\n  - type: circle\n    center: { x: 16, y: 16 }\n    radius: 4\n    colour: blue\n",
        ));
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_collects_across_checks() {
        // Out-of-bounds corner AND an unknown colour name on one shape
        let result = validate_scene(&scene(
            "width: 16\nheight: 16\nshapes:\n  - type: rectangle\n    ll: { x: 0, y: 0 }\n    ur: { x: 16, y: 4 }\n    colour: grey\n",
        ));
        assert!(result.has_errors());
        assert_eq!(result.error_count(), 2);
    }
}
