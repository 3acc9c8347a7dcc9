#![deny(unused_must_use)]
#![warn(clippy::pedantic)]
#![allow(clippy::wildcard_imports)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod ast;
#[cfg(feature = "codegen")]
pub mod codegen;
pub mod diagnostics;
#[cfg(feature = "emission")]
pub mod emission;
#[cfg(feature = "lexer")]
pub mod lexer;
#[cfg(feature = "parser")]
pub mod parser;
pub mod printer;


#[cfg(feature = "emission")]
pub use pipeline::*;

#[cfg(feature = "emission")]
mod pipeline {
    use crate::ast::Program;
    use crate::codegen::CodegenOptions;
    use crate::diagnostics::Diagnostics;
    use crate::parser::ParseError;
    use crate::{emission, lexer, parser};
    use thiserror::Error;
    use tracing::info;

    /// Output of a successful run: assembly text plus advisory diagnostics.
    #[derive(Debug)]
    pub struct Compilation {
        pub assembly: String,
        pub diagnostics: Diagnostics,
    }

    #[derive(Debug, Error)]
    pub enum CompileError {
        #[error("syntax error: {error}")]
        Syntax {
            error: ParseError,
            partial: Program,
            diagnostics: Diagnostics,
        },
    }

    impl CompileError {
        pub fn diagnostics(&self) -> &Diagnostics {
            match self {
                Self::Syntax { diagnostics, .. } => diagnostics,
            }
        }
    }

    /// Runs lex, parse and code generation over `source`.
    pub fn compile(source: &str, options: &CodegenOptions) -> Result<Compilation, CompileError> {
        let mut diagnostics = Diagnostics::new();
        let tokens = lexer::lex(source, &mut diagnostics);
        let program = match parser::parse(&tokens, &mut diagnostics) {
            Ok(program) => program,
            Err(failure) => {
                return Err(CompileError::Syntax {
                    error: failure.error,
                    partial: failure.partial,
                    diagnostics,
                })
            }
        };

        let assembly = emission::generate_with(&program, options);
        info!(
            bytes = assembly.len(),
            diagnostics = diagnostics.len(),
            "compilation finished"
        );
        Ok(Compilation {
            assembly,
            diagnostics,
        })
    }
}
