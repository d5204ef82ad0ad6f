// file: src/models/token.rs
// description: normalized token model carrying surface, canonical and lemma forms
// reference: internal data structures

use serde::{Deserialize, Serialize};

/// Which form of a token is used as the aggregation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CountKey {
    Surface,
    Lemma,
}

impl CountKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            CountKey::Surface => "surface",
            CountKey::Lemma => "lemma",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub surface: String,
    pub canonical: String,
    pub lemma: Option<String>,
    pub pos: Option<String>,
    pub position: usize,
}

impl Token {
    pub fn new(surface: impl Into<String>, canonical: impl Into<String>, position: usize) -> Self {
        Self {
            surface: surface.into(),
            canonical: canonical.into(),
            lemma: None,
            pos: None,
            position,
        }
    }

    pub fn with_lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = Some(lemma.into());
        self
    }

    pub fn with_pos(mut self, pos: impl Into<String>) -> Self {
        self.pos = Some(pos.into());
        self
    }

    /// Form to aggregate on. Lemma keys fall back to the canonical form when
    /// the token was not lemmatized.
    pub fn key(&self, key: CountKey) -> &str {
        match key {
            CountKey::Surface => &self.canonical,
            CountKey::Lemma => self.lemma.as_deref().unwrap_or(&self.canonical),
        }
    }
}
