use super::CodegenOptions;
use crate::ast::{Block, Expression, FunctionDef, Statement};
use crate::codegen::asm_ast::*;

fn gen_prologue(instructions: &mut AsmInstructions) {
    let rbp = Operand::Reg(Register::Rbp);
    let rsp = Operand::Reg(Register::Rsp);
    instructions.push(AsmInstruction::Push(Register::Rbp));
    instructions.push(AsmInstruction::Mov(rsp, rbp));
}

fn gen_epilogue(instructions: &mut AsmInstructions) {
    let rbp = Operand::Reg(Register::Rbp);
    let rsp = Operand::Reg(Register::Rsp);
    instructions.push(AsmInstruction::Mov(rbp, rsp));
    instructions.push(AsmInstruction::Pop(Register::Rbp));
    instructions.push(AsmInstruction::Ret);
}

/// Leaves the expression's value in the return-value register.
fn gen_expression(expression: &Expression, instructions: &mut AsmInstructions) {
    match expression {
        Expression::NumberLiteral(text) => {
            let src = Operand::Imm(text.clone());
            let dst = Operand::Reg(Register::RETURN_VALUE);
            instructions.push(AsmInstruction::Mov(src, dst));
        }
    }
}

fn gen_block(block: &Block, options: &CodegenOptions, instructions: &mut AsmInstructions) {
    for statement in block.iter() {
        gen_statement(statement, options, instructions);
    }
}

fn gen_function(function: &FunctionDef, options: &CodegenOptions, instructions: &mut AsmInstructions) {
    let FunctionDef { name, body, .. } = function;
    instructions.push(AsmInstruction::Label(name.clone()));
    gen_prologue(instructions);
    gen_block(body, options, instructions);

    if options.fallback_epilogue && !body.has_return() {
        gen_epilogue(instructions);
    }
}

pub(super) fn gen_statement(statement: &Statement, options: &CodegenOptions, instructions: &mut AsmInstructions) {
    match statement {
        Statement::FunctionDef(function) => gen_function(function, options, instructions),
        Statement::Block(block) => gen_block(block, options, instructions),
        Statement::Return(expression) => {
            gen_expression(expression, instructions);
            gen_epilogue(instructions);
        }
    }
}
