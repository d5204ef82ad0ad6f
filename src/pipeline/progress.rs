// file: src/pipeline/progress.rs
// description: run counters and the progress bar shown while documents are analyzed
// reference: uses indicatif for progress bars and tracks processing metrics

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

/// Totals for one analysis run.
#[derive(Debug, Clone, Default)]
pub struct PipelineStats {
    pub documents_processed: usize,
    pub documents_failed: usize,
    pub tokens_analyzed: usize,
    pub geminated_units: usize,
    pub duration_secs: f64,
}

impl PipelineStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Percentage of attempted documents that produced a report.
    pub fn success_rate(&self) -> f64 {
        let attempted = self.documents_processed + self.documents_failed;
        if attempted == 0 {
            return 0.0;
        }
        self.documents_processed as f64 * 100.0 / attempted as f64
    }

    pub fn tokens_per_document(&self) -> f64 {
        if self.documents_processed == 0 {
            return 0.0;
        }
        self.tokens_analyzed as f64 / self.documents_processed as f64
    }
}

/// Shared across analysis tasks behind an `Arc`; every update is a relaxed
/// atomic add, the bar is the only thing drawn.
pub struct ProgressTracker {
    bar: ProgressBar,
    processed: AtomicUsize,
    failed: AtomicUsize,
    tokens: AtomicUsize,
    geminated: AtomicUsize,
    started: Instant,
}

impl ProgressTracker {
    pub fn with_color(total_documents: usize, colored: bool) -> Self {
        let bar = ProgressBar::new(total_documents as u64);
        bar.set_style(bar_style(colored));
        Self::from_bar(bar)
    }

    /// Counts without drawing anything.
    pub fn hidden(total_documents: usize) -> Self {
        Self::from_bar(ProgressBar::with_draw_target(
            Some(total_documents as u64),
            ProgressDrawTarget::hidden(),
        ))
    }

    fn from_bar(bar: ProgressBar) -> Self {
        Self {
            bar,
            processed: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
            tokens: AtomicUsize::new(0),
            geminated: AtomicUsize::new(0),
            started: Instant::now(),
        }
    }

    pub fn record_document(&self, document: &str, tokens: usize, geminated_units: usize) {
        self.tokens.fetch_add(tokens, Ordering::Relaxed);
        self.geminated.fetch_add(geminated_units, Ordering::Relaxed);
        self.processed.fetch_add(1, Ordering::Relaxed);
        self.advance(document);
    }

    pub fn record_failure(&self, document: &str) {
        self.failed.fetch_add(1, Ordering::Relaxed);
        self.advance(document);
    }

    fn advance(&self, document: &str) {
        self.bar.inc(1);
        self.bar.set_message(format!(
            "{} | {} tokens, {} geminated, {} failed",
            document,
            self.tokens.load(Ordering::Relaxed),
            self.geminated.load(Ordering::Relaxed),
            self.failed.load(Ordering::Relaxed)
        ));
    }

    pub fn finish(&self) {
        if !self.bar.is_finished() {
            self.bar.finish_with_message("Analysis complete");
        }
    }

    pub fn get_stats(&self) -> PipelineStats {
        PipelineStats {
            documents_processed: self.processed.load(Ordering::Relaxed),
            documents_failed: self.failed.load(Ordering::Relaxed),
            tokens_analyzed: self.tokens.load(Ordering::Relaxed),
            geminated_units: self.geminated.load(Ordering::Relaxed),
            duration_secs: self.started.elapsed().as_secs_f64(),
        }
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn bar_style(colored: bool) -> ProgressStyle {
    let (template, chars) = if colored {
        (
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
            "█▓▒░",
        )
    } else {
        ("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}", "=>-")
    };

    ProgressStyle::with_template(template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars(chars)
}
