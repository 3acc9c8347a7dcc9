use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[allow(clippy::struct_excessive_bools)]
#[derive(Parser, Debug)]
#[command(version, about = "Bolt compiler", long_about = None)]
pub struct Args {
    /// Print the tokens and stop
    #[arg(long)]
    pub lex: bool,

    /// Print the syntax tree and stop
    #[arg(long, conflicts_with = "lex")]
    pub parse: bool,

    /// Close functions lacking a `return` with an epilogue and `ret`
    #[arg(long)]
    pub fallback_epilogue: bool,

    /// Run `nasm -f elf64` on the generated assembly
    #[arg(long)]
    pub assemble: bool,

    /// Output assembly file (defaults to INPUT with an .asm extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    pub input: PathBuf,
}

impl Args {
    pub fn asm_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("asm"))
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
