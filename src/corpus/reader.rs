// file: src/corpus/reader.rs
// description: loads Tesserae plain-text and token/lemma/pos annotated files into documents
// reference: tesserae .tess citation format, CoNLL-style token tables

use crate::corpus::patterns::TESSERAE_LINE;
use crate::error::{AnalysisError, Result};
use crate::models::{Document, TextUnit, Token, UnitScope};
use crate::parser::{Normalize, Tokenizer, is_clause_break};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

const ANNOTATED_EXTENSIONS: &[&str] = &["tsv", "conll"];
const EMPTY_LEMMA: &str = "_";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusFormat {
    Tesserae,
    Annotated,
}

impl CorpusFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ANNOTATED_EXTENSIONS.contains(&ext.to_lowercase().as_str()) => {
                CorpusFormat::Annotated
            }
            _ => CorpusFormat::Tesserae,
        }
    }
}

pub struct CorpusReader<'a> {
    normalizer: &'a dyn Normalize,
    scope: UnitScope,
}

impl<'a> CorpusReader<'a> {
    pub fn new(normalizer: &'a dyn Normalize, scope: UnitScope) -> Self {
        Self { normalizer, scope }
    }

    pub fn read_file(&self, path: &Path) -> Result<Document> {
        let content = fs::read_to_string(path).map_err(|source| AnalysisError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

        let id = document_id(path);
        let source = path.display().to_string();

        let document = match CorpusFormat::from_path(path) {
            CorpusFormat::Tesserae => self.parse_tesserae(&id, &source, &content),
            CorpusFormat::Annotated => self.parse_annotated(&id, &source, &content)?,
        };

        info!(
            "Loaded {}: {} units, {} tokens",
            document.id,
            document.units.len(),
            document.token_count()
        );

        Ok(document)
    }

    /// Parses `<citation>\ttext` lines. Untagged lines are cited as
    /// `<id> <line number>`.
    pub fn parse_tesserae(&self, id: &str, source: &str, content: &str) -> Document {
        let tokenizer = Tokenizer::new(self.normalizer);
        let mut units = Vec::new();

        for (line_no, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let (citation, text) = match TESSERAE_LINE.captures(line) {
                Some(caps) => (
                    caps[1].trim().to_string(),
                    caps.get(2).map_or("", |m| m.as_str()).to_string(),
                ),
                None => (format!("{} {}", id, line_no + 1), line.trim().to_string()),
            };

            units.extend(tokenizer.units(&citation, &text, self.scope));
        }

        debug!("Parsed {} tesserae units from {}", units.len(), source);
        Document::new(id, source, content, units)
    }

    /// Parses `token\tlemma\tpos` rows. Blank lines close a sentence and `#`
    /// lines are comments. Each sentence becomes one unit cited `<id> s<n>`;
    /// under clause scope, punctuation tokens split it into units cited
    /// `<id> s<n>.<k>`.
    pub fn parse_annotated(&self, id: &str, source: &str, content: &str) -> Result<Document> {
        let mut units = Vec::new();
        let mut sentences = 0;
        let mut sentence = Sentence::default();

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim_end_matches('\r');

            if line.starts_with('#') {
                continue;
            }

            if line.trim().is_empty() {
                self.close_sentence(id, &mut sentences, &mut sentence, &mut units);
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() != 3 {
                return Err(AnalysisError::CorpusParse {
                    file: source.to_string(),
                    line: line_no + 1,
                    message: format!("expected token, lemma and pos fields, found {}", fields.len()),
                });
            }

            let (surface, lemma, pos) = (fields[0].trim(), fields[1].trim(), fields[2].trim());

            if self.scope == UnitScope::Clause && is_clause_break(surface) {
                sentence.break_clause();
                continue;
            }

            sentence.words.push(surface.to_string());

            let canonical = self.normalizer.normalize(surface);
            if canonical.is_empty() {
                continue;
            }

            let mut token = Token::new(surface, canonical, sentence.tokens.len());
            if lemma != EMPTY_LEMMA {
                let lemma = self.normalizer.normalize(lemma);
                if !lemma.is_empty() {
                    token = token.with_lemma(lemma);
                }
            }
            if !pos.is_empty() {
                token = token.with_pos(pos);
            }
            sentence.tokens.push(token);
        }

        self.close_sentence(id, &mut sentences, &mut sentence, &mut units);

        debug!(
            "Parsed {} annotated sentences ({} units) from {}",
            sentences,
            units.len(),
            source
        );
        Ok(Document::new(id, source, content, units))
    }

    fn close_sentence(
        &self,
        id: &str,
        sentences: &mut usize,
        sentence: &mut Sentence,
        units: &mut Vec<TextUnit>,
    ) {
        sentence.break_clause();
        let clauses = std::mem::take(&mut sentence.clauses);
        if clauses.is_empty() {
            return;
        }

        *sentences += 1;
        for (k, (text, tokens)) in clauses.into_iter().enumerate() {
            let citation = match self.scope {
                UnitScope::Line => format!("{} s{}", id, sentences),
                UnitScope::Clause => format!("{} s{}.{}", id, sentences, k + 1),
            };
            units.push(TextUnit::new(citation, text, tokens));
        }
    }
}

/// Rows of the sentence being read, with the clauses already closed.
#[derive(Default)]
struct Sentence {
    clauses: Vec<(String, Vec<Token>)>,
    words: Vec<String>,
    tokens: Vec<Token>,
}

impl Sentence {
    fn break_clause(&mut self) {
        if self.words.is_empty() {
            return;
        }
        let text = self.words.join(" ");
        self.words.clear();
        self.clauses.push((text, std::mem::take(&mut self.tokens)));
    }
}

fn document_id(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
