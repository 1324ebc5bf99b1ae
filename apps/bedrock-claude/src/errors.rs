use std::path::PathBuf;
use thiserror::Error;

use bedrock_async::BedrockError;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Prompt file is empty: {0}")]
    EmptyPrompt(PathBuf),

    #[error("File not found: {0}")]
    MissingFile(PathBuf),

    #[error("Unsupported file encoding (non-UTF8): {0}")]
    NonUtf8(PathBuf),

    #[error("DOCX extraction is not available in this build: {0}")]
    DocxUnavailable(PathBuf),

    #[error("DOCX parse error in {path}: {message}")]
    Docx { path: PathBuf, message: String },

    #[error("Bedrock error: {0}")]
    Bedrock(#[from] BedrockError),
}
