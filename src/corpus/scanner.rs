// file: src/corpus/scanner.rs
// description: Directory walking and corpus file discovery with filtering
// reference: https://docs.rs/walkdir

use crate::config::CorpusConfig;
use crate::error::{AnalysisError, Result};
use crate::utils::Validator;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

pub struct CorpusScanner {
    config: CorpusConfig,
}

#[derive(Debug, Clone)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub relative_path: String,
    pub size: u64,
}

impl CorpusScanner {
    pub fn new(config: CorpusConfig) -> Self {
        Self { config }
    }

    /// Resolves CLI inputs into corpus files. Files are taken as given,
    /// directories are walked. Output keeps input order, with each directory's
    /// files sorted by path.
    pub fn collect(&self, inputs: &[PathBuf]) -> Result<Vec<ScannedFile>> {
        let mut files = Vec::new();

        for input in inputs {
            if input.is_dir() {
                files.extend(self.scan_directory(input)?);
            } else if input.is_file() {
                Validator::validate_corpus_extension(input, &self.config.extensions)?;
                let size = input.metadata().map(|m| m.len()).unwrap_or(0);
                files.push(ScannedFile {
                    path: input.clone(),
                    relative_path: input.display().to_string(),
                    size,
                });
            } else {
                return Err(AnalysisError::Validation(format!(
                    "Input path does not exist: {}",
                    input.display()
                )));
            }
        }

        Ok(files)
    }

    pub fn scan_directory(&self, root: &Path) -> Result<Vec<ScannedFile>> {
        info!("Scanning directory: {}", root.display());
        let mut files = Vec::new();
        let max_size = (self.config.max_file_size_mb * 1024 * 1024) as u64;

        for entry in WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();

            if self.should_skip(path) {
                debug!("Skipping file: {}", path.display());
                continue;
            }

            if !self.has_corpus_extension(path) {
                continue;
            }

            let Ok(metadata) = entry.metadata() else {
                continue;
            };

            let size = metadata.len();
            if max_size > 0 && size > max_size {
                debug!(
                    "Skipping large file ({} MB): {}",
                    size / 1024 / 1024,
                    path.display()
                );
                continue;
            }

            let relative_path = path
                .strip_prefix(root)
                .unwrap_or(path)
                .to_string_lossy()
                .to_string();

            files.push(ScannedFile {
                path: path.to_path_buf(),
                relative_path,
                size,
            });
        }

        info!("Found {} corpus files", files.len());
        Ok(files)
    }

    fn has_corpus_extension(&self, path: &Path) -> bool {
        Validator::validate_corpus_extension(path, &self.config.extensions).is_ok()
    }

    fn should_skip(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.config.skip_patterns {
            if pattern.contains('*') {
                let pattern_without_star = pattern.replace("*.", ".");
                if path_str.ends_with(&pattern_without_star) {
                    return true;
                }
            } else if path_str.contains(pattern) {
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::fs;
    use tempfile::TempDir;

    fn scanner() -> CorpusScanner {
        CorpusScanner::new(Config::default_config().corpus)
    }

    #[test]
    fn test_scan_filters_by_extension_and_pattern() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.tess"), "<a 1>\tarma").unwrap();
        fs::write(temp.path().join("a.tsv"), "arma\tarma\tNOUN").unwrap();
        fs::write(temp.path().join("notes.md"), "# notes").unwrap();
        fs::write(temp.path().join("old.tess.bak"), "<a 1>\tarma").unwrap();

        let files = scanner().scan_directory(temp.path()).unwrap();
        let names: Vec<_> = files.iter().map(|f| f.relative_path.as_str()).collect();
        assert_eq!(names, vec!["a.tsv", "b.tess"]);
    }

    #[test]
    fn test_collect_mixes_files_and_directories() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("corpus");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("ecl.tess"), "<a 1>\tarma").unwrap();
        let single = temp.path().join("georg.txt");
        fs::write(&single, "arma").unwrap();

        let files = scanner().collect(&[single.clone(), dir]).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].path, single);
        assert_eq!(files[1].relative_path, "ecl.tess");
    }

    #[test]
    fn test_collect_rejects_unsupported_file() {
        let temp = TempDir::new().unwrap();
        let notes = temp.path().join("notes.md");
        fs::write(&notes, "# notes").unwrap();
        assert!(scanner().collect(&[notes]).is_err());
    }

    #[test]
    fn test_collect_rejects_missing_input() {
        let result = scanner().collect(&[PathBuf::from("/nonexistent/corpus")]);
        assert!(result.is_err());
    }
}
