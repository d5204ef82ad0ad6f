// file: src/models/unit.rs
// description: citation-keyed unit of text (verse line or clause)
// reference: internal data structures

use crate::models::Token;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitScope {
    Line,
    Clause,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextUnit {
    pub citation: String,
    pub text: String,
    pub tokens: Vec<Token>,
}

impl TextUnit {
    pub fn new(citation: impl Into<String>, text: impl Into<String>, tokens: Vec<Token>) -> Self {
        Self {
            citation: citation.into(),
            text: text.into(),
            tokens,
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn canonical_forms(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.canonical.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_forms_preserve_order() {
        let unit = TextUnit::new(
            "verg. ecl. 2.69",
            "a Corydon, Corydon",
            vec![
                Token::new("a", "a", 0),
                Token::new("Corydon", "corydon", 1),
                Token::new("Corydon", "corydon", 2),
            ],
        );

        assert_eq!(unit.len(), 3);
        assert_eq!(unit.canonical_forms(), vec!["a", "corydon", "corydon"]);
    }
}
