// file: src/models/vocabulary.rs
// description: ordered target vocabulary with membership lookup
// reference: internal data structures

use crate::error::{AnalysisError, Result};
use crate::parser::Normalize;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Serialize)]
pub struct Vocabulary {
    entries: Vec<String>,
    #[serde(skip)]
    index: HashSet<String>,
}

impl Vocabulary {
    /// Builds a vocabulary from already-normalized forms. Duplicates keep their
    /// first position.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocabulary = Self {
            entries: Vec::new(),
            index: HashSet::new(),
        };

        for entry in entries {
            vocabulary.push(entry.as_ref())?;
        }

        Ok(vocabulary)
    }

    /// Builds a vocabulary by running each entry through `normalizer` first so
    /// that it matches token canonical forms.
    pub fn normalized<I, S>(entries: I, normalizer: &dyn Normalize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(
            entries
                .into_iter()
                .map(|entry| normalizer.normalize(entry.as_ref())),
        )
    }

    fn push(&mut self, entry: &str) -> Result<()> {
        if entry.is_empty() {
            return Err(AnalysisError::InvalidInput(
                "vocabulary entry is empty".to_string(),
            ));
        }

        if entry.chars().any(char::is_whitespace) {
            return Err(AnalysisError::InvalidInput(format!(
                "vocabulary entry '{}' contains whitespace",
                entry
            )));
        }

        if self.index.insert(entry.to_string()) {
            self.entries.push(entry.to_string());
        }

        Ok(())
    }

    pub fn contains(&self, form: &str) -> bool {
        self.index.contains(form)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::LatinNormalizer;

    #[test]
    fn test_vocabulary_deduplicates_in_order() {
        let vocab = Vocabulary::new(["septem", "octo", "septem"]).unwrap();
        assert_eq!(vocab.entries(), &["septem".to_string(), "octo".to_string()]);
        assert!(vocab.contains("octo"));
        assert!(!vocab.contains("novem"));
    }

    #[test]
    fn test_malformed_entries_are_rejected() {
        assert!(matches!(
            Vocabulary::new([""]),
            Err(AnalysisError::InvalidInput(_))
        ));
        assert!(matches!(
            Vocabulary::new(["duo decim"]),
            Err(AnalysisError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_normalized_vocabulary_matches_token_forms() {
        let normalizer = LatinNormalizer::default();
        let vocab = Vocabulary::normalized(["Novem", "Sēx"], &normalizer).unwrap();
        assert!(vocab.contains("nouem"));
        assert!(vocab.contains("sex"));
    }

    #[test]
    fn test_entry_normalizing_to_nothing_is_rejected() {
        let normalizer = LatinNormalizer::default();
        assert!(Vocabulary::normalized(["42"], &normalizer).is_err());
    }
}
