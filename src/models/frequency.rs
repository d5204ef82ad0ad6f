// file: src/models/frequency.rs
// description: per-document form to count table kept in vocabulary order
// reference: internal data structures

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub form: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, form: impl Into<String>, count: usize) {
        let form = form.into();
        match self.entries.iter_mut().find(|e| e.form == form) {
            Some(entry) => entry.count = count,
            None => self.entries.push(FrequencyEntry { form, count }),
        }
    }

    pub fn get(&self, form: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.form == form)
            .map(|e| e.count)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FrequencyEntry> {
        self.entries.iter()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
