// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Corpus parsing error in {file} at line {line}: {message}")]
    CorpusParse {
        file: String,
        line: usize,
        message: String,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnalysisError::InvalidInput("empty document".to_string());
        assert_eq!(err.to_string(), "Invalid input: empty document");

        let err = AnalysisError::CorpusParse {
            file: "ecl.tsv".to_string(),
            line: 3,
            message: "expected 3 fields".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Corpus parsing error in ecl.tsv at line 3: expected 3 fields"
        );
    }
}
