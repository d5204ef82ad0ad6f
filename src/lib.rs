// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod analysis;
pub mod config;
pub mod corpus;
pub mod error;
pub mod exporter;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod utils;

pub use analysis::{
    Comparison, DocumentCounts, FrequencyAggregator, RateConfig, RateValue, RepetitionDetector,
    UnitRepetition, compare_documents, detect_repeats, rate,
};
pub use crate::config::{Config, CorpusConfig, CountingConfig, GeminationConfig, PipelineConfig};
pub use corpus::{CorpusReader, CorpusScanner, ScannedFile};
pub use error::{AnalysisError, Result};
pub use exporter::{GeminationAnnotator, JsonExporter};
pub use models::{CountKey, Document, FrequencyTable, TextUnit, Token, UnitScope, Vocabulary};
pub use parser::{LatinNormalizer, Normalize, Tokenizer};
pub use pipeline::{DocumentProcessor, DocumentReport, PipelineOrchestrator, PipelineStats};
pub use utils::Validator;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        let processor = DocumentProcessor::new(config);
        assert!(processor.is_ok());
    }

    #[test]
    fn test_raw_line_to_geminated_forms() {
        let normalizer = LatinNormalizer::default();
        let unit = Tokenizer::new(&normalizer).unit(
            "verg. ecl. 2.69",
            "a, Corydon, Corydon, quae te dementia cepit!",
        );
        let repeated = detect_repeats(&unit.canonical_forms(), &HashSet::new());
        assert_eq!(repeated.into_iter().collect::<Vec<_>>(), vec!["corydon"]);
    }
}
