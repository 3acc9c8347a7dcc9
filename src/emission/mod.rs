//! Code emission using [Display]
//!
//! Implements [Display] for [AsmProgram] and its parts, producing NASM
//! (Intel syntax) text for `nasm -f elf64`. Every emitted line ends with a
//! newline.
//!
//! [Display]: https://doc.rust-lang.org/std/fmt/trait.Display.html

use crate::ast::Program;
use crate::codegen::*;

use std::fmt;

const INDENT: &str = "  ";

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Rax => write!(f, "rax"),
            Self::Rbp => write!(f, "rbp"),
            Self::Rsp => write!(f, "rsp"),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Imm(text) => write!(f, "{text}"),
            Self::Reg(r) => write!(f, "{r}"),
        }
    }
}

impl fmt::Display for AsmInstruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Label(name) => write!(f, "{name}:"),
            Self::Mov(src, dst) => write!(f, "{INDENT}mov {dst}, {src}"),
            Self::Push(r) => write!(f, "{INDENT}push {r}"),
            Self::Pop(r) => write!(f, "{INDENT}pop {r}"),
            Self::Ret => write!(f, "{INDENT}ret"),
        }
    }
}

impl fmt::Display for AsmProgram {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "global {}", self.entry)?;
        writeln!(f, "section .text")?;
        for instruction in &self.instructions {
            writeln!(f, "{instruction}")?;
        }
        Ok(())
    }
}

/// Assembly text for `program` with default [CodegenOptions].
pub fn generate(program: &Program) -> String {
    generate_with(program, &CodegenOptions::default())
}

pub fn generate_with(program: &Program, options: &CodegenOptions) -> String {
    codegen(program, options).to_string()
}
