// file: src/exporter/json.rs
// description: json export of per-document counts, rates and gemination hits

use crate::analysis::{Comparison, DocumentCounts, RateEntry, UnitRepetition};
use crate::error::Result;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
    pretty: bool,
    files: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ExportedCounts<'a> {
    #[serde(flatten)]
    pub counts: &'a DocumentCounts,
    pub rates: &'a [RateEntry],
}

#[derive(Debug, Serialize)]
pub struct ExportedGeminations<'a> {
    pub document: &'a str,
    pub total_units: usize,
    pub geminated_units: &'a [UnitRepetition],
}

#[derive(Debug, Serialize)]
pub struct ExportManifest {
    pub exported_at: String,
    pub total_files: usize,
    pub files: Vec<String>,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>, pretty: bool) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self {
            output_dir,
            pretty,
            files: Vec::new(),
        })
    }

    pub fn export_counts(&mut self, counts: &DocumentCounts, rates: &[RateEntry]) -> Result<PathBuf> {
        let file_name = format!("{}.counts.json", sanitize_name(&counts.name));
        self.write(&file_name, &ExportedCounts { counts, rates })
    }

    pub fn export_geminations(
        &mut self,
        document: &str,
        total_units: usize,
        hits: &[UnitRepetition],
    ) -> Result<PathBuf> {
        let file_name = format!("{}.gemination.json", sanitize_name(document));
        self.write(
            &file_name,
            &ExportedGeminations {
                document,
                total_units,
                geminated_units: hits,
            },
        )
    }

    pub fn export_comparison(&mut self, comparison: &Comparison) -> Result<PathBuf> {
        self.write("comparison.json", comparison)
    }

    /// Writes `manifest.json` listing every file exported so far.
    pub fn finish(self) -> Result<ExportManifest> {
        let manifest = ExportManifest {
            exported_at: Utc::now().to_rfc3339(),
            total_files: self.files.len(),
            files: self.files.clone(),
        };

        let path = self.output_dir.join("manifest.json");
        fs::write(&path, self.serialize(&manifest)?)?;

        info!(
            "Export complete: {} files written to {}",
            manifest.total_files,
            self.output_dir.display()
        );
        Ok(manifest)
    }

    fn write<T: Serialize + ?Sized>(&mut self, file_name: &str, value: &T) -> Result<PathBuf> {
        let path = self.output_dir.join(file_name);
        fs::write(&path, self.serialize(value)?)?;
        debug!("Wrote {}", path.display());

        self.files.push(file_name.to_string());
        Ok(path)
    }

    fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' { c } else { '_' })
        .collect()
}
