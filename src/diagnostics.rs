//! Diagnostics collected while rewriting a module.

use swc_core::common::Span;

/// A diagnostic produced by the rewrite.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub severity: Severity,
    pub message: String,
    /// Location of the node the diagnostic is about.
    pub span: Span,
}

impl Diagnostic {
    pub fn new(code: DiagnosticCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            severity: code.default_severity(),
            code,
            message: message.into(),
            span,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Output is correct but deserves a second look.
    Note,
    /// Output was left partially untransformed.
    Warning,
    /// The current glamorous import was not migrated.
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// `options-not-object`: second factory argument is not an object literal
    OptionsNotObject,
    /// `unknown-option`: factory option emotion does not understand
    UnknownOption,
    /// `content-not-inspected`: factory argument not checked for `content`
    ContentNotInspected,
    /// `unknown-usage`: glamorous binding used in an unrecognised position
    UnknownUsage,
    /// `css-attribute-literal`: `css` attribute without an expression value
    CssAttributeLiteral,
    /// `dropped-specifier`: import specifier with no emotion counterpart
    DroppedSpecifier,
    /// `rewrite-failed`: fatal error, import left untouched
    RewriteFailed,
}

impl DiagnosticCode {
    pub fn default_severity(&self) -> Severity {
        match self {
            DiagnosticCode::ContentNotInspected => Severity::Note,
            DiagnosticCode::RewriteFailed => Severity::Error,
            DiagnosticCode::OptionsNotObject
            | DiagnosticCode::UnknownOption
            | DiagnosticCode::UnknownUsage
            | DiagnosticCode::CssAttributeLiteral
            | DiagnosticCode::DroppedSpecifier => Severity::Warning,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::OptionsNotObject => "options-not-object",
            DiagnosticCode::UnknownOption => "unknown-option",
            DiagnosticCode::ContentNotInspected => "content-not-inspected",
            DiagnosticCode::UnknownUsage => "unknown-usage",
            DiagnosticCode::CssAttributeLiteral => "css-attribute-literal",
            DiagnosticCode::DroppedSpecifier => "dropped-specifier",
            DiagnosticCode::RewriteFailed => "rewrite-failed",
        }
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Conditions that abort the migration of one glamorous import.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RewriteError {
    #[error("can't handle glamorous call with 0 arguments")]
    NoFactoryArguments { span: Span },

    #[error("can't handle glamorous call with {count} arguments (at most 2 are supported)")]
    TooManyFactoryArguments { span: Span, count: usize },

    #[error("not sure how to deal with glamorous within {context}")]
    UnsupportedMemberUsage { span: Span, context: &'static str },
}

impl RewriteError {
    pub fn span(&self) -> Span {
        match self {
            RewriteError::NoFactoryArguments { span }
            | RewriteError::TooManyFactoryArguments { span, .. }
            | RewriteError::UnsupportedMemberUsage { span, .. } => *span,
        }
    }
}

impl From<RewriteError> for Diagnostic {
    fn from(err: RewriteError) -> Self {
        Diagnostic::new(DiagnosticCode::RewriteFailed, err.to_string(), err.span())
    }
}

/// Everything a caller needs to surface after a rewrite.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Warning)
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.severity == severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swc_core::common::DUMMY_SP;

    #[test]
    fn fatal_errors_become_error_diagnostics() {
        let diagnostic: Diagnostic =
            RewriteError::TooManyFactoryArguments { span: DUMMY_SP, count: 3 }.into();
        assert_eq!(diagnostic.code, DiagnosticCode::RewriteFailed);
        assert_eq!(diagnostic.severity, Severity::Error);
        assert!(diagnostic.message.contains("3 arguments"));
    }

    #[test]
    fn report_filters_by_severity() {
        let report = Report {
            diagnostics: vec![
                Diagnostic::new(DiagnosticCode::UnknownOption, "a", DUMMY_SP),
                Diagnostic::new(DiagnosticCode::ContentNotInspected, "b", DUMMY_SP),
            ],
        };
        assert!(!report.has_errors());
        assert_eq!(report.warnings().count(), 1);
    }
}
