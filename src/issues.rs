//! Diagnostic types for option resolution results.
//!
//! Every parameter line the resolver drops produces exactly one diagnostic.
//! Each diagnostic is self-contained with everything needed by:
//! - Reporter: to display the drop to users (CLI report, verbose log)
//! - Session: to raise user-facing notices (e.g. a removed onLoad callback)

use enum_dispatch::enum_dispatch;

use crate::options::{ParameterLine, ParameterOrigin};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Why a parameter line was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    Duplicate,
    UnusedOnLoad,
    EnforcedDefault,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Duplicate => write!(f, "duplicate"),
            Rule::UnusedOnLoad => write!(f, "unused-onload"),
            Rule::EnforcedDefault => write!(f, "enforced-default"),
        }
    }
}

// ============================================================
// Parameter Context
// ============================================================

/// Where a dropped parameter came from and what it said.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterContext {
    pub origin: ParameterOrigin,
    /// 1-based line number within its origin block.
    pub line: usize,
    /// The line as written, before whitespace removal.
    pub source_line: String,
    pub parameter: ParameterLine,
}

impl ParameterContext {
    pub fn new(
        origin: ParameterOrigin,
        line: usize,
        source_line: impl Into<String>,
        parameter: ParameterLine,
    ) -> Self {
        Self {
            origin,
            line,
            source_line: source_line.into(),
            parameter,
        }
    }

    pub fn key(&self) -> &str {
        &self.parameter.key
    }

    pub fn value(&self) -> &str {
        &self.parameter.value
    }
}

// ============================================================
// Diagnostic Types
// ============================================================

/// A key that was already accepted earlier in the pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateParameterIssue {
    pub context: ParameterContext,
    /// Value of the occurrence that won.
    pub kept_value: String,
}

impl DuplicateParameterIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::Duplicate
    }
}

/// An `onLoad` callback whose name does not appear in the code body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnusedOnLoadIssue {
    pub context: ParameterContext,
}

impl UnusedOnLoadIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnusedOnLoad
    }
}

/// A key whose value is fixed while a non-custom framework is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnforcedDefaultIssue {
    pub context: ParameterContext,
    /// The value enforced in place of the user's.
    pub enforced_value: bool,
}

impl EnforcedDefaultIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::EnforcedDefault
    }
}

// ============================================================
// Diagnostic Enum
// ============================================================

/// A parameter line dropped during resolution.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    Duplicate(DuplicateParameterIssue),
    UnusedOnLoad(UnusedOnLoadIssue),
    EnforcedDefault(EnforcedDefaultIssue),
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    /// The diagnostic kind (`duplicate`, `unused-onload`, `enforced-default`).
    pub fn kind(&self) -> Rule {
        self.report_rule()
    }

    pub fn key(&self) -> &str {
        self.context().key()
    }

    pub fn value(&self) -> &str {
        self.context().value()
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Trait for diagnostics that can be reported to the CLI.
///
/// Implemented by every diagnostic type; `enum_dispatch` forwards the calls
/// on the `Diagnostic` enum.
#[enum_dispatch]
pub trait Report {
    fn context(&self) -> &ParameterContext;

    /// Headline text (the parameter as it would have been emitted).
    fn message(&self) -> String {
        self.context().parameter.to_string()
    }

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<String> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for DuplicateParameterIssue {
    fn context(&self) -> &ParameterContext {
        &self.context
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "'{}' is already set to '{}'",
            self.context.key(),
            self.kept_value
        ))
    }
}

impl Report for UnusedOnLoadIssue {
    fn context(&self) -> &ParameterContext {
        &self.context
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "an unused onLoad event '{}' was removed from the parameters",
            self.context.value()
        ))
    }

    fn hint(&self) -> Option<String> {
        Some(format!(
            "define a function named '{}' in the code",
            self.context.value()
        ))
    }
}

impl Report for EnforcedDefaultIssue {
    fn context(&self) -> &ParameterContext {
        &self.context
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "'{}' is fixed to {} for this framework",
            self.context.key(),
            self.enforced_value
        ))
    }

    fn hint(&self) -> Option<String> {
        Some("select the custom framework to override it".to_string())
    }
}
