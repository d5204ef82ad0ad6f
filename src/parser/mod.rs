// file: src/parser/mod.rs
// description: text normalization and tokenization module exports
// reference: internal module structure

pub mod normalizer;
pub mod tokenizer;

pub use normalizer::{LatinNormalizer, Normalize};
pub use tokenizer::{Tokenizer, is_clause_break, split_clauses};
