// file: src/utils/validation.rs
// description: input path validation helpers
// reference: input validation patterns

use crate::error::{AnalysisError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(AnalysisError::Validation(format!(
                "Directory does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(AnalysisError::Validation(format!(
                "Path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_corpus_extension(path: &Path, extensions: &[String]) -> Result<()> {
        let supported = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)));

        if !supported {
            return Err(AnalysisError::Validation(format!(
                "Unsupported corpus file (expected one of {}): {}",
                extensions.join(", "),
                path.display()
            )));
        }

        Ok(())
    }

    /// The file itself may not exist yet, but its directory must.
    pub fn validate_output_file(path: &Path) -> Result<()> {
        if path.is_dir() {
            return Err(AnalysisError::Validation(format!(
                "Output path is a directory: {}",
                path.display()
            )));
        }

        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => Self::validate_directory(parent),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_directory() {
        let temp = TempDir::new().unwrap();
        assert!(Validator::validate_directory(temp.path()).is_ok());
        assert!(Validator::validate_directory(Path::new("/nonexistent")).is_err());
    }

    #[test]
    fn test_validate_corpus_extension() {
        let extensions = vec!["tess".to_string(), "tsv".to_string()];
        assert!(Validator::validate_corpus_extension(Path::new("ecl.tess"), &extensions).is_ok());
        assert!(Validator::validate_corpus_extension(Path::new("AEN.TSV"), &extensions).is_ok());
        assert!(Validator::validate_corpus_extension(Path::new("notes.md"), &extensions).is_err());
        assert!(Validator::validate_corpus_extension(Path::new("README"), &extensions).is_err());
    }

    #[test]
    fn test_validate_output_file() {
        let temp = TempDir::new().unwrap();
        assert!(Validator::validate_output_file(&temp.path().join("out.tsv")).is_ok());
        assert!(Validator::validate_output_file(temp.path()).is_err());
        assert!(Validator::validate_output_file(Path::new("/nonexistent/dir/out.tsv")).is_err());
        assert!(Validator::validate_output_file(Path::new("out.tsv")).is_ok());
    }
}
