// file: src/analysis/frequency.rs
// description: vocabulary occurrence counting over whole documents
// reference: Counter-style tallies over normalized forms

use crate::models::{CountKey, Document, FrequencyTable, Token, Vocabulary};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Per-document counts together with the document length they were taken over.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentCounts {
    pub name: String,
    pub key: CountKey,
    pub total_tokens: usize,
    pub counts: FrequencyTable,
}

#[derive(Debug, Clone)]
pub struct FrequencyAggregator {
    vocabulary: Vocabulary,
    key: CountKey,
}

impl FrequencyAggregator {
    pub fn new(vocabulary: Vocabulary, key: CountKey) -> Self {
        Self { vocabulary, key }
    }

    /// Every vocabulary entry gets a row, zero when it never occurs.
    pub fn count<'t>(&self, tokens: impl IntoIterator<Item = &'t Token>) -> FrequencyTable {
        count_keys(
            tokens.into_iter().map(|token| token.key(self.key)),
            &self.vocabulary,
        )
    }

    pub fn count_forms<S: AsRef<str>>(&self, forms: &[S]) -> FrequencyTable {
        count_keys(forms.iter().map(|f| f.as_ref()), &self.vocabulary)
    }

    pub fn count_document(&self, document: &Document) -> DocumentCounts {
        let counts = self.count(document.tokens());
        debug!(
            "Counted {} vocabulary hits in {} ({} tokens)",
            counts.total(),
            document.id,
            document.token_count()
        );

        DocumentCounts {
            name: document.id.clone(),
            key: self.key,
            total_tokens: document.token_count(),
            counts,
        }
    }
}

fn count_keys<'k>(keys: impl Iterator<Item = &'k str>, vocabulary: &Vocabulary) -> FrequencyTable {
    let mut hits: HashMap<&str, usize> = HashMap::new();
    for key in keys {
        if vocabulary.contains(key) {
            *hits.entry(key).or_insert(0) += 1;
        }
    }

    let mut table = FrequencyTable::new();
    for entry in vocabulary.entries() {
        table.insert(entry.as_str(), hits.get(entry.as_str()).copied().unwrap_or(0));
    }
    table
}
