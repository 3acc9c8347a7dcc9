pub mod asm_ast;
mod gen;

use crate::ast::Program;
use tracing::debug;

pub use asm_ast::*;

use gen::gen_statement;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct CodegenOptions {
    /// Close functions with the epilogue and `ret` when no `return` is
    /// reachable in the body. Nested blocks are searched, nested function
    /// definitions are not. Off by default: such bodies otherwise fall off
    /// the end of the prologue.
    pub fallback_epilogue: bool,
}

/// Lowers the tree into a flat instruction listing, visiting statements in
/// pre-order.
pub fn codegen(program: &Program, options: &CodegenOptions) -> AsmProgram {
    let mut instructions = AsmInstructions::new();
    for statement in &program.statements {
        gen_statement(statement, options, &mut instructions);
    }
    debug!(instructions = instructions.len(), "code generation finished");
    AsmProgram::new(instructions)
}
