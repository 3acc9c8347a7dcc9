//! Indented dump of the tree for `--parse`.

use crate::ast::{Block, Expression, Program, Statement};
use std::fmt;

const STEP: &str = "  ";

/// Renders a [`Program`] as an indented outline, one node per line.
pub struct AstPrinter<'a>(pub &'a Program);

fn indent(f: &mut fmt::Formatter, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str(STEP)?;
    }
    Ok(())
}

fn fmt_expression(f: &mut fmt::Formatter, expression: &Expression, depth: usize) -> fmt::Result {
    indent(f, depth)?;
    match expression {
        Expression::NumberLiteral(text) => writeln!(f, "NumberLiteral({text})"),
    }
}

fn fmt_block(f: &mut fmt::Formatter, block: &Block, depth: usize) -> fmt::Result {
    indent(f, depth)?;
    writeln!(f, "BlockStmt:")?;
    for statement in &block.statements {
        match statement {
            Some(statement) => fmt_statement(f, statement, depth + 1)?,
            None => {
                indent(f, depth + 1)?;
                writeln!(f, "NullStatement")?;
            }
        }
    }
    Ok(())
}

fn fmt_statement(f: &mut fmt::Formatter, statement: &Statement, depth: usize) -> fmt::Result {
    match statement {
        Statement::FunctionDef(function) => {
            indent(f, depth)?;
            writeln!(f, "FunctionDef({} {})", function.return_type, function.name)?;
            fmt_block(f, &function.body, depth + 1)
        }
        Statement::Block(block) => fmt_block(f, block, depth),
        Statement::Return(expression) => {
            indent(f, depth)?;
            writeln!(f, "ReturnStmt:")?;
            fmt_expression(f, expression, depth + 1)
        }
    }
}

impl fmt::Display for AstPrinter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for statement in &self.0.statements {
            fmt_statement(f, statement, 0)?;
        }
        Ok(())
    }
}

pub fn print_ast(program: &Program) -> String {
    AstPrinter(program).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_function() {
        let body = Block::new(vec![Some(Statement::ret(Expression::number("0"))), None]);
        let program = Program::new(vec![Statement::function("int", "main", body)]);
        let expected = "FunctionDef(int main)\n  BlockStmt:\n    ReturnStmt:\n      NumberLiteral(0)\n    NullStatement\n";
        assert_eq!(expected, print_ast(&program));
    }

    #[test]
    fn test_print_nested_block() {
        let inner = Statement::Block(Block::new(vec![Some(Statement::ret(Expression::number("4")))]));
        let program = Program::new(vec![Statement::function("int", "main", Block::new(vec![Some(inner)]))]);
        let expected = "FunctionDef(int main)\n  BlockStmt:\n    BlockStmt:\n      ReturnStmt:\n        NumberLiteral(4)\n";
        assert_eq!(expected, AstPrinter(&program).to_string());
    }

    #[test]
    fn test_print_empty() {
        assert_eq!("", print_ast(&Program::default()));
    }
}
