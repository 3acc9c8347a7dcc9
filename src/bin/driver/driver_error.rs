use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("File {0} does not exist")]
    InputFileDoesNotExist(String),
    #[error("Failed to run assembler")]
    AssemblerFailed,
    #[error("compilation failed with {0} error(s)")]
    CompilationFailed(usize),
}
