// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod document;
pub mod frequency;
pub mod token;
pub mod unit;
pub mod vocabulary;

pub use document::Document;
pub use frequency::{FrequencyEntry, FrequencyTable};
pub use token::{CountKey, Token};
pub use unit::{TextUnit, UnitScope};
pub use vocabulary::Vocabulary;
