// file: src/exporter/tsv.rs
// description: tab-separated gemination report with repeated words marked in the line text
// reference: citation<TAB>text corpus line layout

use crate::analysis::UnitRepetition;
use crate::error::Result;
use crate::parser::Normalize;
use std::collections::BTreeSet;
use std::io::Write;
use unicode_segmentation::UnicodeSegmentation;

pub struct GeminationAnnotator<'a> {
    normalizer: &'a dyn Normalize,
    marker_open: String,
    marker_close: String,
}

impl<'a> GeminationAnnotator<'a> {
    pub fn new(
        normalizer: &'a dyn Normalize,
        marker_open: impl Into<String>,
        marker_close: impl Into<String>,
    ) -> Self {
        Self {
            normalizer,
            marker_open: marker_open.into(),
            marker_close: marker_close.into(),
        }
    }

    /// Wraps every word of `text` whose normalized form is in `repeated`.
    /// Punctuation and spacing are kept as they were.
    pub fn annotate(&self, text: &str, repeated: &BTreeSet<String>) -> String {
        let mut annotated = String::with_capacity(text.len());

        for segment in text.split_word_bounds() {
            let normalized = self.normalizer.normalize(segment);
            let hit = normalized
                .split_whitespace()
                .any(|form| repeated.contains(form));

            if hit {
                annotated.push_str(&self.marker_open);
                annotated.push_str(segment);
                annotated.push_str(&self.marker_close);
            } else {
                annotated.push_str(segment);
            }
        }

        annotated
    }

    pub fn write_report<W: Write>(&self, out: &mut W, hits: &[UnitRepetition]) -> Result<usize> {
        for hit in hits {
            let line = self.annotate(&hit.text, &hit.repeated).replace(['\t', '\n'], " ");
            writeln!(out, "{}\t{}", hit.citation, line)?;
        }

        Ok(hits.len())
    }
}
