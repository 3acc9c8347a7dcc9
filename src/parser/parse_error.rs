use crate::ast::Program;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum InnerParseError {
    #[error("{0}")]
    Expected(&'static str),
    #[error("Expected an expression (e.g., a number).")]
    ExpectedExpression,
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("{inner} (line {ln})")]
pub struct ParseError {
    pub inner: InnerParseError,
    pub ln: u64,
}

/// A syntax error together with the declarations parsed before it.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("{error}")]
pub struct ParseFailure {
    pub error: ParseError,
    pub partial: Program,
}

impl ParseError {
    pub fn get_line(&self) -> u64 {
        self.ln
    }
}

impl InnerParseError {
    pub fn set_line(self, ln: u64) -> ParseError {
        ParseError { inner: self, ln }
    }
}
