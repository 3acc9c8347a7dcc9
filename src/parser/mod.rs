mod cursor;
mod parse_error;

use crate::ast::*;
use crate::diagnostics::{Diagnostics, Stage};
use crate::lexer::{Token, TokenKind};
use cursor::Cursor;
use tracing::debug;

pub use parse_error::{InnerParseError, ParseError, ParseFailure, Result};

/// Discards the current token and reports it.
fn skip_and_warn(cursor: &mut Cursor, diagnostics: &mut Diagnostics, context: &str) {
    let line = cursor.get_line();
    if let Some(token) = cursor.advance() {
        diagnostics.warn(Stage::Parser, Some(line), format!("Skipping unknown {context}: {token}"));
    }
}

fn parse_expression(cursor: &mut Cursor) -> Result<Expression> {
    if cursor.check(TokenKind::NumberLiteral) {
        if let Some(number) = cursor.advance() {
            return Ok(Expression::number(number.text()));
        }
    }
    let line = cursor.get_line();
    Err(InnerParseError::ExpectedExpression.set_line(line))
}

fn parse_return(cursor: &mut Cursor) -> Result<Statement> {
    cursor.expect(TokenKind::Return, "Expected 'return'.")?;
    let expression = parse_expression(cursor)?;
    cursor.expect(TokenKind::Semicolon, "Expected ';' after return value.")?;
    Ok(Statement::ret(expression))
}

fn parse_statement(cursor: &mut Cursor, diagnostics: &mut Diagnostics) -> Result<Option<Statement>> {
    if cursor.check(TokenKind::Return) {
        return parse_return(cursor).map(Some);
    }
    skip_and_warn(cursor, diagnostics, "token in block");
    Ok(None)
}

fn parse_block(cursor: &mut Cursor, diagnostics: &mut Diagnostics) -> Result<Block> {
    cursor.expect(TokenKind::OpenCurly, "Expected '{' to begin a block.")?;

    let mut statements = Vec::new();
    while !cursor.check(TokenKind::CloseCurly) && !cursor.at_end() {
        let statement = parse_statement(cursor, diagnostics)?;
        statements.push(statement);
    }

    cursor.expect(TokenKind::CloseCurly, "Expected '}' to end a block.")?;
    Ok(Block::new(statements))
}

fn parse_function(cursor: &mut Cursor, diagnostics: &mut Diagnostics) -> Result<Statement> {
    let return_type = cursor.expect(TokenKind::Int, "Expected return type.")?;
    let name = cursor.expect(TokenKind::Identifier, "Expected function name.")?;
    cursor.expect(TokenKind::OpenParanth, "Expected '(' after function name.")?;
    cursor.expect(TokenKind::CloseParanth, "Expected ')' after parameters.")?;
    let body = parse_block(cursor, diagnostics)?;
    Ok(Statement::function(return_type.text(), name.text(), body))
}

fn is_function_start(cursor: &Cursor) -> bool {
    cursor.check(TokenKind::Int) && cursor.check_nth(1, TokenKind::Identifier)
}

fn parse_declaration(cursor: &mut Cursor, diagnostics: &mut Diagnostics) -> Result<Option<Statement>> {
    if is_function_start(cursor) {
        return parse_function(cursor, diagnostics).map(Some);
    }
    skip_and_warn(cursor, diagnostics, "top-level token");
    Ok(None)
}

/// Builds the [Program] for `tokens`.
///
/// Tokens that cannot start a declaration or a statement are reported to
/// `diagnostics` and skipped one at a time. The first syntax error stops
/// the parse; it is reported as well and returned together with the
/// declarations completed before it.
pub fn parse(tokens: &[Token], diagnostics: &mut Diagnostics) -> std::result::Result<Program, ParseFailure> {
    let mut program = Program::default();
    let mut cursor = Cursor::new(tokens);

    while !cursor.at_end() {
        match parse_declaration(&mut cursor, diagnostics) {
            Ok(Some(declaration)) => program.statements.push(declaration),
            Ok(None) => (),
            Err(error) => {
                diagnostics.error(Stage::Parser, Some(error.get_line()), error.to_string());
                return Err(ParseFailure {
                    error,
                    partial: program,
                });
            }
        }
    }

    debug!(declarations = program.statements.len(), "parsing finished");
    Ok(program)
}
