use crate::lexer::{Token, TokenKind};
use crate::parser::{InnerParseError, Result};

#[derive(Debug)]
pub struct Cursor<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    pub fn peek_nth(&self, n: usize) -> Option<&'a Token> {
        self.tokens.get(self.position + n)
    }

    /// Running off the slice counts as end of stream.
    pub fn at_end(&self) -> bool {
        self.peek().map_or(true, Token::is_eof)
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        !self.at_end() && self.peek().is_some_and(|t| t.is(kind))
    }

    pub fn check_nth(&self, n: usize, kind: TokenKind) -> bool {
        self.peek_nth(n).is_some_and(|t| t.is(kind))
    }

    /// Line of the current token, or of the last one when past the end.
    pub fn get_line(&self) -> u64 {
        self.peek()
            .or_else(|| self.tokens.last())
            .map_or(1, Token::get_line)
    }

    /// Consumes the current token unless it is the end of stream.
    pub fn advance(&mut self) -> Option<&'a Token> {
        if self.at_end() {
            return self.peek();
        }
        let current = self.peek();
        self.position += 1;
        current
    }

    pub fn expect(&mut self, kind: TokenKind, message: &'static str) -> Result<&'a Token> {
        if self.check(kind) {
            if let Some(token) = self.advance() {
                return Ok(token);
            }
        }
        let line = self.get_line();
        Err(InnerParseError::Expected(message).set_line(line))
    }
}
