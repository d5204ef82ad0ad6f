// file: src/analysis/repetition.rs
// description: gemination detection, forms repeated within a single line or clause
// reference: Counter-style tallies over normalized forms

use crate::models::TextUnit;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap, HashSet};

pub const DEFAULT_MIN_OCCURRENCES: usize = 2;

/// Returns the forms occurring more than once in `tokens`, minus `exclusions`.
pub fn detect_repeats<S: AsRef<str>>(tokens: &[S], exclusions: &HashSet<String>) -> BTreeSet<String> {
    detect_repeats_with_threshold(tokens, exclusions, DEFAULT_MIN_OCCURRENCES)
}

pub fn detect_repeats_with_threshold<S: AsRef<str>>(
    tokens: &[S],
    exclusions: &HashSet<String>,
    min_occurrences: usize,
) -> BTreeSet<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_ref()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .filter(|(form, count)| *count >= min_occurrences && !exclusions.contains(*form))
        .map(|(form, _)| form.to_string())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitRepetition {
    pub citation: String,
    pub text: String,
    pub repeated: BTreeSet<String>,
    /// Token positions carrying a repeated form, ascending.
    pub positions: Vec<usize>,
}

impl UnitRepetition {
    pub fn is_geminated(&self) -> bool {
        !self.repeated.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct RepetitionDetector {
    exclusions: HashSet<String>,
    min_occurrences: usize,
}

impl RepetitionDetector {
    pub fn new<I, S>(exclusions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            exclusions: exclusions.into_iter().map(Into::into).collect(),
            min_occurrences: DEFAULT_MIN_OCCURRENCES,
        }
    }

    pub fn with_min_occurrences(mut self, min_occurrences: usize) -> Self {
        self.min_occurrences = min_occurrences.max(DEFAULT_MIN_OCCURRENCES);
        self
    }

    pub fn exclusions(&self) -> &HashSet<String> {
        &self.exclusions
    }

    pub fn detect(&self, forms: &[&str]) -> BTreeSet<String> {
        detect_repeats_with_threshold(forms, &self.exclusions, self.min_occurrences)
    }

    pub fn detect_unit(&self, unit: &TextUnit) -> UnitRepetition {
        let repeated = self.detect(&unit.canonical_forms());

        let positions = unit
            .tokens
            .iter()
            .filter(|t| repeated.contains(&t.canonical))
            .map(|t| t.position)
            .collect();

        UnitRepetition {
            citation: unit.citation.clone(),
            text: unit.text.clone(),
            repeated,
            positions,
        }
    }

    /// Geminated units only, in input order.
    pub fn scan<'a>(&self, units: impl IntoIterator<Item = &'a TextUnit>) -> Vec<UnitRepetition> {
        units
            .into_iter()
            .map(|unit| self.detect_unit(unit))
            .filter(UnitRepetition::is_geminated)
            .collect()
    }
}

impl Default for RepetitionDetector {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::frequency::FrequencyAggregator;
    use crate::models::{CountKey, Token, Vocabulary};
    use pretty_assertions::assert_eq;

    fn set(forms: &[&str]) -> BTreeSet<String> {
        forms.iter().map(|f| f.to_string()).collect()
    }

    fn exclusions(forms: &[&str]) -> HashSet<String> {
        forms.iter().map(|f| f.to_string()).collect()
    }

    fn samples() -> Vec<Vec<&'static str>> {
        vec![
            vec![],
            vec!["arma"],
            vec!["corydon", "corydon", "quae", "te", "dementia", "cepit"],
            vec!["sic", "canibus", "catulos", "similis", "sic", "matribus", "haedos"],
            vec!["terras", "que", "tractus", "que", "maris", "caelum", "que"],
            vec!["i", "i", "i", "nunc", "et", "uersus", "tecum", "meditare", "canoros", "nunc"],
            vec!["a", "b", "c", "d"],
        ]
    }

    #[test]
    fn test_corydon_line() {
        let tokens = ["corydon", "corydon", "quae", "te", "dementia", "cepit"];
        assert_eq!(detect_repeats(&tokens, &HashSet::new()), set(&["corydon"]));
    }

    #[test]
    fn test_sic_line() {
        let tokens = ["sic", "canibus", "catulos", "similis", "sic", "matribus", "haedos"];
        assert_eq!(detect_repeats(&tokens, &HashSet::new()), set(&["sic"]));
    }

    #[test]
    fn test_excluded_clitic_is_ignored() {
        let tokens = ["terras", "que", "tractus", "que", "maris", "caelum", "que"];
        assert_eq!(detect_repeats(&tokens, &exclusions(&["que"])), set(&[]));
        assert_eq!(detect_repeats(&tokens, &HashSet::new()), set(&["que"]));
    }

    #[test]
    fn test_empty_and_unique_sequences() {
        let empty: [&str; 0] = [];
        assert!(detect_repeats(&empty, &HashSet::new()).is_empty());
        assert!(detect_repeats(&["a", "b", "c"], &HashSet::new()).is_empty());
    }

    #[test]
    fn test_agrees_with_frequency_aggregator() {
        for sample in samples() {
            // every form of the line becomes a vocabulary entry
            let vocabulary = Vocabulary::new(&sample).unwrap();
            let aggregator = FrequencyAggregator::new(vocabulary, CountKey::Surface);
            let expected: BTreeSet<String> = aggregator
                .count_forms(&sample)
                .iter()
                .filter(|entry| entry.count > 1)
                .map(|entry| entry.form.clone())
                .collect();
            assert_eq!(detect_repeats(&sample, &HashSet::new()), expected);
        }
    }

    #[test]
    fn test_exclusions_only_shrink_result() {
        let exclusion_sets = [exclusions(&[]), exclusions(&["que"]), exclusions(&["i", "nunc", "x"])];
        for sample in samples() {
            let unrestricted = detect_repeats(&sample, &HashSet::new());
            for excluded in &exclusion_sets {
                let restricted = detect_repeats(&sample, excluded);
                assert!(restricted.is_subset(&unrestricted));
                assert!(restricted.is_disjoint(&excluded.iter().cloned().collect()));
            }
        }
    }

    #[test]
    fn test_detection_is_idempotent() {
        let excluded = exclusions(&["que"]);
        for sample in samples() {
            assert_eq!(detect_repeats(&sample, &excluded), detect_repeats(&sample, &excluded));
        }
    }

    #[test]
    fn test_threshold_raises_bar() {
        let tokens = ["i", "i", "i", "nunc", "nunc"];
        assert_eq!(
            detect_repeats_with_threshold(&tokens, &HashSet::new(), 3),
            set(&["i"])
        );
    }

    #[test]
    fn test_detect_unit_reports_positions() {
        let words = ["a", "corydon", "corydon", "quae", "te", "dementia", "cepit"];
        let tokens = words
            .iter()
            .enumerate()
            .map(|(i, w)| Token::new(*w, *w, i))
            .collect();
        let unit = TextUnit::new("verg. ecl. 2.69", words.join(" "), tokens);

        let detector = RepetitionDetector::new(["que"]);
        let result = detector.detect_unit(&unit);

        assert!(result.is_geminated());
        assert_eq!(result.citation, "verg. ecl. 2.69");
        assert_eq!(result.repeated, set(&["corydon"]));
        assert_eq!(result.positions, vec![1, 2]);
    }

    #[test]
    fn test_scan_keeps_only_geminated_units() {
        let unit = |cite: &str, words: &[&str]| {
            let tokens = words
                .iter()
                .enumerate()
                .map(|(i, w)| Token::new(*w, *w, i))
                .collect();
            TextUnit::new(cite, words.join(" "), tokens)
        };
        let units = vec![
            unit("1", &["tityre", "tu", "patulae"]),
            unit("2", &["sic", "canibus", "sic"]),
            unit("3", &["que", "arma", "que"]),
        ];

        let detector = RepetitionDetector::new(["que"]);
        let hits = detector.scan(&units);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].citation, "2");
    }
}
