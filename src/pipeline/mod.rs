// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod orchestrator;
mod processor;
mod progress;

pub use orchestrator::{FailedDocument, PipelineOrchestrator, PipelineRun};
pub use processor::{DocumentProcessor, DocumentReport};
pub use progress::{PipelineStats, ProgressTracker};
