// file: src/models/document.rs
// description: corpus document model holding ordered text units and a content hash
// reference: internal data structures

use crate::models::{Token, TextUnit};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub source_path: String,
    pub content_hash: String,
    pub units: Vec<TextUnit>,
}

impl Document {
    pub fn new(
        id: impl Into<String>,
        source_path: impl Into<String>,
        raw_content: &str,
        units: Vec<TextUnit>,
    ) -> Self {
        Self {
            id: id.into(),
            source_path: source_path.into(),
            content_hash: Self::compute_hash(raw_content),
            units,
        }
    }

    fn compute_hash(content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    pub fn token_count(&self) -> usize {
        self.units.iter().map(TextUnit::len).sum()
    }

    /// All tokens of the document in reading order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.units.iter().flat_map(|unit| unit.tokens.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(citation: &str, words: &[&str]) -> TextUnit {
        let tokens = words
            .iter()
            .enumerate()
            .map(|(i, w)| Token::new(*w, *w, i))
            .collect();
        TextUnit::new(citation, words.join(" "), tokens)
    }

    #[test]
    fn test_document_creation() {
        let doc = Document::new(
            "ecl",
            "/corpus/vergil.eclogues.tess",
            "<verg. ecl. 1.1>\ttityre tu",
            vec![unit("verg. ecl. 1.1", &["tityre", "tu"]), unit("verg. ecl. 1.2", &["siluestrem"])],
        );

        assert_eq!(doc.id, "ecl");
        assert_eq!(doc.token_count(), 3);
        assert_eq!(
            doc.tokens().map(|t| t.canonical.as_str()).collect::<Vec<_>>(),
            vec!["tityre", "tu", "siluestrem"]
        );
        assert!(!doc.content_hash.is_empty());
    }

    #[test]
    fn test_hash_consistency() {
        let content = "Test content";
        let hash1 = Document::compute_hash(content);
        let hash2 = Document::compute_hash(content);
        assert_eq!(hash1, hash2);
    }
}
