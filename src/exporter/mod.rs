// file: src/exporter/mod.rs
// description: report export module exports
// reference: internal module structure

pub mod json;
pub mod tsv;

pub use json::{ExportManifest, JsonExporter};
pub use tsv::GeminationAnnotator;
