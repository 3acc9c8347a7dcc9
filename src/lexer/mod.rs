mod cursor;
mod lexer_error;
#[cfg(test)]
mod lexer_tests;
mod token;

use crate::diagnostics::Diagnostics;
use cursor::Cursor;
use tracing::debug;

pub use lexer_error::{InnerLexError, LexError};
pub use token::{Token, TokenKind};

pub type Tokens = Vec<Token>;

const INCLUDE_SKIP: usize = 6;
const UNTERMINATED_SENTINEL: &str = "ERROR";

enum Lexed {
    Token(Token),
    Skipped,
    Halt(Token),
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn skip_whitespaces_and_comments(cursor: &mut Cursor) {
    loop {
        cursor.skip_whitespaces();
        if cursor.peek() == Some('/') && cursor.peek_2nd() == Some('/') {
            cursor.skip_line();
        } else {
            return;
        }
    }
}

fn lex_identifier(cursor: &mut Cursor) -> Token {
    let line = cursor.get_line();
    let word = cursor.take_while(is_identifier_char);
    let kind = TokenKind::keyword(&word).unwrap_or(TokenKind::Identifier);
    Token::new(kind, word, line)
}

fn lex_number(cursor: &mut Cursor) -> Token {
    let line = cursor.get_line();
    let digits = cursor.take_while(|c| c.is_ascii_digit());
    Token::new(TokenKind::NumberLiteral, digits, line)
}

// Six characters after `#` are dropped unchecked, so the trailing `e` of
// `include` lexes on its own.
fn lex_include(cursor: &mut Cursor) -> Token {
    let line = cursor.get_line();
    cursor.take();
    cursor.skip_n(INCLUDE_SKIP);
    Token::new(TokenKind::Include, "#include", line)
}

fn lex_string(cursor: &mut Cursor) -> std::result::Result<Token, LexError> {
    let start = cursor.get_line();
    cursor.take();
    let content = cursor.take_while(|c| c != '"');
    if cursor.take().is_none() {
        return Err(InnerLexError::UnterminatedString.set_line(start));
    }
    Ok(Token::new(TokenKind::StringLiteral, content, start))
}

fn lex_punctuation(cursor: &mut Cursor, c: char) -> std::result::Result<Token, LexError> {
    let line = cursor.get_line();
    cursor.take();
    TokenKind::try_from(c)
        .map(|kind| Token::new(kind, c, line))
        .map_err(|c| InnerLexError::UnknownChar(c).set_line(line))
}

fn lex_next(cursor: &mut Cursor, c: char, diagnostics: &mut Diagnostics) -> Lexed {
    let lexed = match c {
        '#' if cursor.peek_2nd() == Some('i') => Ok(lex_include(cursor)),
        '"' => match lex_string(cursor) {
            Ok(token) => Ok(token),
            Err(err) => {
                diagnostics.push(err.into());
                let sentinel = Token::new(TokenKind::Eof, UNTERMINATED_SENTINEL, cursor.get_line());
                return Lexed::Halt(sentinel);
            }
        },
        c if c.is_ascii_digit() => Ok(lex_number(cursor)),
        c if is_identifier_start(c) => Ok(lex_identifier(cursor)),
        c => lex_punctuation(cursor, c),
    };

    match lexed {
        Ok(token) => Lexed::Token(token),
        Err(err) => {
            diagnostics.push(err.into());
            Lexed::Skipped
        }
    }
}

/// Splits `input` into tokens.
///
/// Never fails: unknown characters are reported to `diagnostics` and
/// dropped. The returned sequence always ends with exactly one
/// [`TokenKind::Eof`] token. An unterminated string literal stops the scan
/// and the sequence ends with an injected `Eof` token whose text is
/// `ERROR`.
pub fn lex(input: &str, diagnostics: &mut Diagnostics) -> Tokens {
    let mut tokens = Tokens::new();
    let mut cursor = Cursor::new(input);

    loop {
        skip_whitespaces_and_comments(&mut cursor);
        let Some(c) = cursor.peek() else {
            break;
        };

        match lex_next(&mut cursor, c, diagnostics) {
            Lexed::Token(token) => tokens.push(token),
            Lexed::Skipped => (),
            Lexed::Halt(sentinel) => {
                tokens.push(sentinel);
                debug!(count = tokens.len(), "lexing halted early");
                return tokens;
            }
        }
    }

    tokens.push(Token::new(TokenKind::Eof, "", cursor.get_line()));
    debug!(count = tokens.len(), "lexing finished");
    tokens
}
