use crate::ast::Identifier;

/// Symbol declared global in the preamble.
pub const ENTRY_SYMBOL: &str = "main";

/// Flat instruction listing, preceded by the preamble when emitted.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AsmProgram {
    pub entry: Identifier,
    pub instructions: AsmInstructions,
}

pub type AsmInstructions = Vec<AsmInstruction>;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum AsmInstruction {
    Label(Identifier),
    /// `Mov(src, dst)`
    Mov(Operand, Operand),
    Push(Register),
    Pop(Register),
    Ret,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Operand {
    /// Verbatim immediate text.
    Imm(String),
    Reg(Register),
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Register {
    Rax,
    Rbp,
    Rsp,
}

impl Register {
    /// Holds a function's result at return time.
    pub const RETURN_VALUE: Self = Self::Rax;
}

impl AsmProgram {
    pub fn new(instructions: AsmInstructions) -> Self {
        Self {
            entry: ENTRY_SYMBOL.to_owned(),
            instructions,
        }
    }
}
