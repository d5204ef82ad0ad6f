// file: src/pipeline/processor.rs
// description: turns scanned corpus files into gemination and vocabulary reports
// reference: reads, tokenizes and analyzes one document at a time

use crate::analysis::{DocumentCounts, FrequencyAggregator, RepetitionDetector, UnitRepetition};
use crate::config::Config;
use crate::corpus::{CorpusReader, ScannedFile};
use crate::error::{AnalysisError, Result};
use crate::models::Vocabulary;
use crate::parser::{LatinNormalizer, Normalize};
use serde::Serialize;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub document: String,
    pub source_path: String,
    pub content_hash: String,
    pub total_units: usize,
    pub geminations: Vec<UnitRepetition>,
    pub counts: DocumentCounts,
}

pub struct DocumentProcessor {
    config: Config,
    normalizer: LatinNormalizer,
    detector: RepetitionDetector,
    aggregator: FrequencyAggregator,
}

impl DocumentProcessor {
    pub fn new(config: Config) -> Result<Self> {
        let normalizer = LatinNormalizer::new(config.normalization.clone());

        let exclusions: Vec<String> = config
            .gemination
            .exclusions
            .iter()
            .map(|e| normalizer.normalize(e))
            .filter(|e| !e.is_empty())
            .collect();
        let detector = RepetitionDetector::new(exclusions)
            .with_min_occurrences(config.gemination.min_occurrences);

        let vocabulary = Vocabulary::normalized(&config.counting.vocabulary, &normalizer)?;
        let aggregator = FrequencyAggregator::new(vocabulary, config.counting.key);

        Ok(Self {
            config,
            normalizer,
            detector,
            aggregator,
        })
    }

    pub fn process(&self, scanned_file: &ScannedFile) -> Result<DocumentReport> {
        info!("Processing file: {}", scanned_file.relative_path);

        let max_bytes = (self.config.corpus.max_file_size_mb as u64) * 1_048_576;
        if max_bytes > 0 && scanned_file.size > max_bytes {
            warn!(
                "File too large ({} bytes), skipping: {}",
                scanned_file.size, scanned_file.relative_path
            );
            return Err(AnalysisError::Validation(format!(
                "File too large: {}",
                scanned_file.relative_path
            )));
        }

        let reader = CorpusReader::new(&self.normalizer, self.config.gemination.scope);
        let document = reader.read_file(&scanned_file.path)?;

        if document.token_count() == 0 {
            warn!("Document {} contains no tokens", document.id);
        }

        let geminations = self.detector.scan(&document.units);
        let counts = self.aggregator.count_document(&document);

        debug!(
            "{}: {} geminated units, {} vocabulary hits",
            document.id,
            geminations.len(),
            counts.counts.total()
        );

        Ok(DocumentReport {
            document: document.id.clone(),
            source_path: document.source_path.clone(),
            content_hash: document.content_hash.clone(),
            total_units: document.units.len(),
            geminations,
            counts,
        })
    }
}
