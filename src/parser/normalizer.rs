// file: src/parser/normalizer.rs
// description: Latin text normalization for case and diacritic insensitive matching
// reference: https://docs.rs/unicode-normalization

use crate::config::NormalizationConfig;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Maps raw token text to the canonical form used for matching.
pub trait Normalize: Send + Sync {
    fn normalize(&self, text: &str) -> String;
}

#[derive(Debug, Clone)]
pub struct LatinNormalizer {
    config: NormalizationConfig,
}

impl LatinNormalizer {
    pub fn new(config: NormalizationConfig) -> Self {
        Self { config }
    }

    fn replace_jv(text: &str) -> String {
        text.chars()
            .map(|c| match c {
                'j' => 'i',
                'J' => 'I',
                'v' => 'u',
                'V' => 'U',
                other => other,
            })
            .collect()
    }

    fn strip_punctuation(text: &str) -> String {
        text.chars()
            .map(|c| {
                if c.is_alphanumeric() || c.is_whitespace() || is_combining_mark(c) {
                    c
                } else {
                    ' '
                }
            })
            .collect()
    }

    fn strip_numbers(text: &str) -> String {
        text.chars()
            .map(|c| if c.is_ascii_digit() { ' ' } else { c })
            .collect()
    }

    fn strip_diacritics(text: &str) -> String {
        text.nfd().filter(|c| !is_combining_mark(*c)).collect()
    }
}

impl Default for LatinNormalizer {
    fn default() -> Self {
        Self::new(NormalizationConfig {
            lowercase: true,
            replace_jv: true,
            strip_punctuation: true,
            strip_numbers: true,
            strip_diacritics: true,
        })
    }
}

impl Normalize for LatinNormalizer {
    fn normalize(&self, text: &str) -> String {
        let mut normalized = if self.config.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        if self.config.replace_jv {
            normalized = Self::replace_jv(&normalized);
        }

        if self.config.strip_punctuation {
            normalized = Self::strip_punctuation(&normalized);
        }

        if self.config.strip_numbers {
            normalized = Self::strip_numbers(&normalized);
        }

        if self.config.strip_diacritics {
            normalized = Self::strip_diacritics(&normalized);
        }

        normalized
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .nfc()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_diacritics_fold() {
        let normalizer = LatinNormalizer::default();
        assert_eq!(normalizer.normalize("Corydōn"), "corydon");
        assert_eq!(normalizer.normalize("SĒPTEM"), "septem");
        assert_eq!(normalizer.normalize("dēmentia"), "dementia");
    }

    #[test]
    fn test_jv_replacement() {
        let normalizer = LatinNormalizer::default();
        assert_eq!(normalizer.normalize("Iuvenis"), "iuuenis");
        assert_eq!(normalizer.normalize("jam novem"), "iam nouem");
    }

    #[test]
    fn test_punctuation_and_numbers_removed() {
        let normalizer = LatinNormalizer::default();
        assert_eq!(
            normalizer.normalize("a, Corydon, Corydon, 69 quae te dementia cepit!"),
            "a corydon corydon quae te dementia cepit"
        );
        assert_eq!(normalizer.normalize("«sic»"), "sic");
    }

    #[test]
    fn test_toggles_are_respected() {
        let normalizer = LatinNormalizer::new(NormalizationConfig {
            lowercase: false,
            replace_jv: false,
            strip_punctuation: false,
            strip_numbers: false,
            strip_diacritics: false,
        });
        assert_eq!(normalizer.normalize("Iūlius  2,"), "Iūlius 2,");
    }
}
