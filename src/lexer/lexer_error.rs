use crate::diagnostics::{Diagnostic, Severity, Stage};
use thiserror::Error;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum InnerLexError {
    #[error("Unknown character '{0}'")]
    UnknownChar(char),
    #[error("Unterminated string")]
    UnterminatedString,
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("{inner} on line {ln}")]
pub struct LexError {
    inner: InnerLexError,
    ln: u64,
}

impl LexError {
    pub fn get_line(&self) -> u64 {
        self.ln
    }
}

impl InnerLexError {
    pub(super) fn set_line(self, ln: u64) -> LexError {
        LexError { inner: self, ln }
    }
}

impl From<LexError> for Diagnostic {
    fn from(err: LexError) -> Self {
        Diagnostic::new(Stage::Lexer, Severity::Error, Some(err.get_line()), err.to_string())
    }
}
