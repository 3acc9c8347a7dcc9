mod args;
mod driver_error;

use anyhow::Context;
use args::Args;
use boltc::codegen::CodegenOptions;
use boltc::diagnostics::Diagnostics;
use boltc::*;
use clap::Parser;
use driver_error::DriverError;
use std::fs;
use std::path::Path;
use std::process::Command;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging(args: &Args) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn read_source(path: &Path) -> anyhow::Result<String> {
    if !path.exists() {
        let filename = path.to_string_lossy().to_string();
        return Err(DriverError::InputFileDoesNotExist(filename).into());
    }
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn dump_tokens(source: &str) {
    let mut diagnostics = Diagnostics::new();
    for token in lexer::lex(source, &mut diagnostics) {
        println!("{token}");
    }
}

fn dump_ast(source: &str) -> anyhow::Result<()> {
    let mut diagnostics = Diagnostics::new();
    let tokens = lexer::lex(source, &mut diagnostics);
    let program = parser::parse(&tokens, &mut diagnostics)?;
    print!("{}", printer::print_ast(&program));
    Ok(())
}

fn assemble(asm_file: &Path) -> anyhow::Result<()> {
    let obj_file = asm_file.with_extension("o");
    let status = Command::new("nasm")
        .arg("-f")
        .arg("elf64")
        .arg(asm_file)
        .arg("-o")
        .arg(&obj_file)
        .status()
        .context("running nasm")?;
    if !status.success() {
        return Err(DriverError::AssemblerFailed.into());
    }
    info!(object = %obj_file.display(), "assembled");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args);

    let source = read_source(&args.input)?;

    if args.lex {
        dump_tokens(&source);
        return Ok(());
    }

    if args.parse {
        return dump_ast(&source);
    }

    let options = CodegenOptions {
        fallback_epilogue: args.fallback_epilogue,
    };
    let compilation = match compile(&source, &options) {
        Ok(compilation) => compilation,
        Err(err) => {
            let errors = err.diagnostics().iter().filter(|d| d.is_error()).count();
            return Err(err).context(DriverError::CompilationFailed(errors));
        }
    };

    let asm_file = args.asm_path();
    fs::write(&asm_file, &compilation.assembly)
        .with_context(|| format!("writing {}", asm_file.display()))?;
    info!(
        bytes = compilation.assembly.len(),
        output = %asm_file.display(),
        "assembly written"
    );

    if args.assemble {
        assemble(&asm_file)?;
    }

    Ok(())
}
