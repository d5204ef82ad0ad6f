// file: src/parser/tokenizer.rs
// description: word segmentation of verse lines into normalized tokens
// reference: https://docs.rs/unicode-segmentation

use crate::models::{TextUnit, Token, UnitScope};
use crate::parser::Normalize;
use unicode_segmentation::UnicodeSegmentation;

const CLAUSE_BREAKS: &[char] = &[',', ';', ':', '.', '?', '!'];

pub struct Tokenizer<'a> {
    normalizer: &'a dyn Normalize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(normalizer: &'a dyn Normalize) -> Self {
        Self { normalizer }
    }

    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();

        for word in text.unicode_words() {
            let normalized = self.normalizer.normalize(word);
            // stripping digits or marks can split a word or empty it entirely
            for form in normalized.split_whitespace() {
                tokens.push(Token::new(word, form, tokens.len()));
            }
        }

        tokens
    }

    pub fn unit(&self, citation: &str, text: &str) -> TextUnit {
        TextUnit::new(citation, text, self.tokenize(text))
    }

    /// Splits a cited line into analysis units. Clause scope yields one unit
    /// per clause, cited as `<citation>.<n>`.
    pub fn units(&self, citation: &str, text: &str, scope: UnitScope) -> Vec<TextUnit> {
        match scope {
            UnitScope::Line => vec![self.unit(citation, text)],
            UnitScope::Clause => split_clauses(text)
                .into_iter()
                .enumerate()
                .map(|(i, clause)| self.unit(&format!("{}.{}", citation, i + 1), clause))
                .collect(),
        }
    }
}

/// True for a standalone punctuation token that ends a clause, as found in
/// annotated token tables.
pub fn is_clause_break(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| CLAUSE_BREAKS.contains(&c))
}

pub fn split_clauses(text: &str) -> Vec<&str> {
    text.split(CLAUSE_BREAKS)
        .map(str::trim)
        .filter(|clause| !clause.is_empty())
        .collect()
}
