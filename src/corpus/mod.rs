// file: src/corpus/mod.rs
// description: corpus discovery and reading module exports
// reference: internal module structure

pub mod patterns;
pub mod reader;
pub mod scanner;

pub use reader::{CorpusFormat, CorpusReader};
pub use scanner::{CorpusScanner, ScannedFile};
