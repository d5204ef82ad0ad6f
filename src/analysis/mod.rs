// file: src/analysis/mod.rs
// description: repetition and frequency analysis module exports
// reference: internal module structure

pub mod comparison;
pub mod frequency;
pub mod rate;
pub mod repetition;

pub use comparison::{Comparison, DocumentRates, RankedDocument, compare_documents};
pub use frequency::{DocumentCounts, FrequencyAggregator};
pub use rate::{RateConfig, RateEntry, RateValue, rate, rate_table};
pub use repetition::{RepetitionDetector, UnitRepetition, detect_repeats, detect_repeats_with_threshold};
