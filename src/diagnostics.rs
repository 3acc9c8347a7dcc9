//! Advisory diagnostics sink shared by the pipeline stages.
//!
//! Stages never print. They push [Diagnostic]s into a caller-owned
//! [Diagnostics] collector, and every pushed diagnostic is mirrored as a
//! `tracing` event so a subscriber installed by the driver sees it too.

use std::fmt;
use tracing::{error, warn};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Stage {
    Lexer,
    Parser,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Diagnostic {
    pub stage: Stage,
    pub severity: Severity,
    pub line: Option<u64>,
    pub message: String,
}

#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Lexer => write!(f, "Lexer"),
            Self::Parser => write!(f, "Parser"),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "Warning"),
            Self::Error => write!(f, "Error"),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}: {}", self.stage, self.severity, self.message)
    }
}

impl Diagnostic {
    pub fn new(stage: Stage, severity: Severity, line: Option<u64>, message: impl Into<String>) -> Self {
        Self {
            stage,
            severity,
            line,
            message: message.into(),
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        let stage = diagnostic.stage;
        let line = diagnostic.line;
        match diagnostic.severity {
            Severity::Warning => warn!(%stage, ?line, "{}", diagnostic.message),
            Severity::Error => error!(%stage, ?line, "{}", diagnostic.message),
        }
        self.items.push(diagnostic);
    }

    pub fn warn(&mut self, stage: Stage, line: Option<u64>, message: impl Into<String>) {
        self.push(Diagnostic::new(stage, Severity::Warning, line, message));
    }

    pub fn error(&mut self, stage: Stage, line: Option<u64>, message: impl Into<String>) {
        self.push(Diagnostic::new(stage, Severity::Error, line, message));
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.items.iter().any(Diagnostic::is_error)
    }

    /// Rendered single-line messages, in report order.
    pub fn messages(&self) -> Vec<String> {
        self.items.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
