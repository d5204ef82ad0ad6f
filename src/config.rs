// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::analysis::rate::MAX_RATE_PRECISION;
use crate::error::{AnalysisError, Result};
use crate::models::{CountKey, UnitScope};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub corpus: CorpusConfig,
    pub normalization: NormalizationConfig,
    pub gemination: GeminationConfig,
    pub counting: CountingConfig,
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    pub extensions: Vec<String>,
    #[serde(default)]
    pub skip_patterns: Vec<String>,
    pub max_file_size_mb: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NormalizationConfig {
    pub lowercase: bool,
    pub replace_jv: bool,
    pub strip_punctuation: bool,
    pub strip_numbers: bool,
    pub strip_diacritics: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminationConfig {
    #[serde(default)]
    pub exclusions: Vec<String>,
    pub scope: UnitScope,
    pub min_occurrences: usize,
    pub marker_open: String,
    pub marker_close: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CountingConfig {
    pub vocabulary: Vec<String>,
    pub key: CountKey,
    pub rate_scale: f64,
    pub rate_precision: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    pub parallel_workers: usize,
}

pub const DEFAULT_NUMBER_WORDS: &[&str] = &[
    "unus", "duo", "tres", "quattuor", "quinque", "sex", "septem", "octo", "novem", "decem",
    "centum", "mille",
];

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("GEMINATIO")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| AnalysisError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| AnalysisError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            corpus: CorpusConfig {
                extensions: vec![
                    "tess".to_string(),
                    "txt".to_string(),
                    "tsv".to_string(),
                    "conll".to_string(),
                ],
                skip_patterns: vec![".git/".to_string(), "*.bak".to_string()],
                max_file_size_mb: 10,
            },
            normalization: NormalizationConfig {
                lowercase: true,
                replace_jv: true,
                strip_punctuation: true,
                strip_numbers: true,
                strip_diacritics: true,
            },
            gemination: GeminationConfig {
                exclusions: vec!["que".to_string(), "ne".to_string(), "ue".to_string()],
                scope: UnitScope::Line,
                min_occurrences: 2,
                marker_open: "[".to_string(),
                marker_close: "]".to_string(),
            },
            counting: CountingConfig {
                vocabulary: DEFAULT_NUMBER_WORDS.iter().map(|w| w.to_string()).collect(),
                key: CountKey::Surface,
                rate_scale: 1000.0,
                rate_precision: 2,
            },
            pipeline: PipelineConfig {
                parallel_workers: 4,
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.pipeline.parallel_workers == 0 {
            return Err(AnalysisError::Config(
                "parallel_workers must be greater than 0".to_string(),
            ));
        }

        if self.counting.rate_scale <= 0.0 || !self.counting.rate_scale.is_finite() {
            return Err(AnalysisError::Config(
                "rate_scale must be a positive number".to_string(),
            ));
        }

        if self.counting.rate_precision > MAX_RATE_PRECISION {
            return Err(AnalysisError::Config(format!(
                "rate_precision must be at most {}",
                MAX_RATE_PRECISION
            )));
        }

        if self.counting.vocabulary.is_empty() {
            return Err(AnalysisError::Config(
                "counting vocabulary must not be empty".to_string(),
            ));
        }

        if self.gemination.min_occurrences < 2 {
            return Err(AnalysisError::Config(
                "min_occurrences must be at least 2".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.counting.rate_scale, 1000.0);
        assert_eq!(config.counting.vocabulary.len(), 12);
    }

    #[test]
    fn test_validate_rejects_zero_workers() {
        let mut config = Config::default_config();
        config.pipeline.parallel_workers = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_rate_settings() {
        let mut config = Config::default_config();
        config.counting.rate_scale = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::default_config();
        config.counting.rate_precision = 11;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_single_occurrence_threshold() {
        let mut config = Config::default_config();
        config.gemination.min_occurrences = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("geminatio.toml");
        fs::write(
            &path,
            r#"
[corpus]
extensions = ["tess"]
max_file_size_mb = 5

[normalization]
lowercase = true
replace_jv = false
strip_punctuation = true
strip_numbers = true
strip_diacritics = true

[gemination]
exclusions = ["que"]
scope = "clause"
min_occurrences = 2
marker_open = "<b>"
marker_close = "</b>"

[counting]
vocabulary = ["septem", "octo"]
key = "lemma"
rate_scale = 1000.0
rate_precision = 3

[pipeline]
parallel_workers = 2
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.gemination.scope, UnitScope::Clause);
        assert_eq!(config.counting.key, CountKey::Lemma);
        assert_eq!(config.counting.rate_precision, 3);
        assert!(!config.normalization.replace_jv);
        assert!(config.corpus.skip_patterns.is_empty());
    }
}
