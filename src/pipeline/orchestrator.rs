// file: src/pipeline/orchestrator.rs
// description: coordinates corpus scanning and concurrent per-document analysis
// reference: orchestrates asynchronous analysis workflow

use crate::config::Config;
use crate::corpus::{CorpusScanner, ScannedFile};
use crate::error::{AnalysisError, Result};
use crate::pipeline::processor::{DocumentProcessor, DocumentReport};
use crate::pipeline::progress::{PipelineStats, ProgressTracker};
use futures::stream::{self, StreamExt};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Debug, Clone)]
pub struct FailedDocument {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Clone)]
pub struct PipelineRun {
    /// Successful reports in input order.
    pub reports: Vec<DocumentReport>,
    pub failures: Vec<FailedDocument>,
    pub stats: PipelineStats,
}

pub struct PipelineOrchestrator {
    config: Config,
    processor: Arc<DocumentProcessor>,
    max_concurrent_tasks: usize,
    show_progress: bool,
    colored: bool,
}

impl PipelineOrchestrator {
    pub fn new(config: Config) -> Result<Self> {
        let processor = Arc::new(DocumentProcessor::new(config.clone())?);
        let max_concurrent_tasks = config.pipeline.parallel_workers.max(1);

        Ok(Self {
            config,
            processor,
            max_concurrent_tasks,
            show_progress: false,
            colored: true,
        })
    }

    pub fn with_progress(mut self, show_progress: bool, colored: bool) -> Self {
        self.show_progress = show_progress;
        self.colored = colored;
        self
    }

    pub async fn run(&self, inputs: Vec<PathBuf>) -> Result<PipelineRun> {
        info!("Starting corpus analysis");

        let files = self.scan_files(inputs).await?;
        info!("Found {} documents to analyze", files.len());

        if files.is_empty() {
            warn!("No corpus files found to analyze");
            return Ok(PipelineRun {
                reports: Vec::new(),
                failures: Vec::new(),
                stats: PipelineStats::new(),
            });
        }

        let progress = Arc::new(if self.show_progress {
            ProgressTracker::with_color(files.len(), self.colored)
        } else {
            ProgressTracker::hidden(files.len())
        });

        info!(
            "Analyzing documents with {} concurrent tasks...",
            self.max_concurrent_tasks
        );
        let (reports, failures) = self.process_files(files, progress.clone()).await;

        let stats = progress.get_stats();
        progress.finish();
        self.log_final_stats(&stats);

        Ok(PipelineRun {
            reports,
            failures,
            stats,
        })
    }

    async fn scan_files(&self, inputs: Vec<PathBuf>) -> Result<Vec<ScannedFile>> {
        let corpus_config = self.config.corpus.clone();

        tokio::task::spawn_blocking(move || {
            let scanner = CorpusScanner::new(corpus_config);
            scanner.collect(&inputs)
        })
        .await
        .map_err(|e| AnalysisError::Validation(format!("Corpus scanning task failed: {}", e)))?
    }

    async fn process_files(
        &self,
        files: Vec<ScannedFile>,
        progress: Arc<ProgressTracker>,
    ) -> (Vec<DocumentReport>, Vec<FailedDocument>) {
        let tasks = files.into_iter().map(|file| {
            let processor = self.processor.clone();
            let progress = progress.clone();

            async move {
                let file_path = file.relative_path.clone();
                let processed = tokio::task::spawn_blocking(move || processor.process(&file)).await;

                match processed {
                    Ok(Ok(report)) => {
                        progress.record_document(
                            &report.document,
                            report.counts.total_tokens,
                            report.geminations.len(),
                        );
                        Ok(report)
                    }
                    Ok(Err(e)) => {
                        progress.record_failure(&file_path);
                        warn!("Failed to analyze {}: {}", file_path, e);
                        Err(FailedDocument {
                            path: file_path,
                            error: e.to_string(),
                        })
                    }
                    Err(e) => {
                        progress.record_failure(&file_path);
                        error!("Analysis task panicked: {}", e);
                        Err(FailedDocument {
                            path: file_path,
                            error: e.to_string(),
                        })
                    }
                }
            }
        });

        // buffered, not buffer_unordered: reports come back in input order
        let results: Vec<std::result::Result<DocumentReport, FailedDocument>> = stream::iter(tasks)
            .buffered(self.max_concurrent_tasks)
            .collect()
            .await;

        let mut reports = Vec::new();
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(report) => reports.push(report),
                Err(failure) => failures.push(failure),
            }
        }

        (reports, failures)
    }

    fn log_final_stats(&self, stats: &PipelineStats) {
        info!("=== Analysis Summary ===");
        info!("Duration: {:.2} seconds", stats.duration_secs);
        info!("Documents analyzed: {}", stats.documents_processed);
        info!("Documents failed: {}", stats.documents_failed);
        info!("Success rate: {:.2}%", stats.success_rate());
        info!(
            "Tokens analyzed: {} ({:.0} per document)",
            stats.tokens_analyzed,
            stats.tokens_per_document()
        );
        info!("Geminated units: {}", stats.geminated_units);
        info!("========================");
    }
}
