// file: src/analysis/comparison.rs
// description: cross-document rate comparison and ranking
// reference: stable ranking of per-document vocabulary rates

use crate::analysis::frequency::DocumentCounts;
use crate::analysis::rate::{RateConfig, RateEntry, RateValue, raw_rate, rate};
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Serialize)]
pub struct DocumentRates {
    pub name: String,
    pub total_tokens: usize,
    pub total_count: usize,
    pub total_rate: RateValue,
    pub rates: Vec<RateEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedDocument {
    pub rank: usize,
    pub name: String,
    pub total_count: usize,
    pub total_rate: RateValue,
}

#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub config: RateConfig,
    pub documents: Vec<DocumentRates>,
    pub ranking: Vec<RankedDocument>,
}

/// Rates every document and ranks them by total vocabulary rate, highest
/// first. Ties keep input order; empty documents are marked skipped and
/// ranked last.
pub fn compare_documents(inputs: &[DocumentCounts], config: &RateConfig) -> Comparison {
    let documents: Vec<DocumentRates> = inputs
        .iter()
        .map(|doc| {
            let total_count = doc.counts.total();
            let rates = doc
                .counts
                .iter()
                .map(|entry| RateEntry {
                    form: entry.form.clone(),
                    count: entry.count,
                    rate: RateValue::from_result(rate(entry.count, doc.total_tokens, config)),
                })
                .collect();

            DocumentRates {
                name: doc.name.clone(),
                total_tokens: doc.total_tokens,
                total_count,
                total_rate: RateValue::from_result(rate(total_count, doc.total_tokens, config)),
                rates,
            }
        })
        .collect();

    // rank on unrounded totals so rounding does not manufacture ties
    let mut order: Vec<(usize, Option<f64>)> = inputs
        .iter()
        .enumerate()
        .map(|(idx, doc)| {
            let raw = raw_rate(doc.counts.total(), doc.total_tokens, config.scale).ok();
            (idx, raw.filter(|_| !documents[idx].total_rate.is_skipped()))
        })
        .collect();

    order.sort_by(|a, b| match (a.1, b.1) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    let ranking = order
        .into_iter()
        .enumerate()
        .map(|(position, (idx, _))| RankedDocument {
            rank: position + 1,
            name: documents[idx].name.clone(),
            total_count: documents[idx].total_count,
            total_rate: documents[idx].total_rate,
        })
        .collect();

    Comparison {
        config: *config,
        documents,
        ranking,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CountKey, FrequencyTable};
    use pretty_assertions::assert_eq;

    fn counts(name: &str, total_tokens: usize, rows: &[(&str, usize)]) -> DocumentCounts {
        let mut table = FrequencyTable::new();
        for (form, count) in rows {
            table.insert(*form, *count);
        }
        DocumentCounts {
            name: name.to_string(),
            key: CountKey::Surface,
            total_tokens,
            counts: table,
        }
    }

    #[test]
    fn test_ranking_by_total_rate() {
        let inputs = vec![
            counts("eclogues", 7201, &[("septem", 1), ("octo", 0)]),
            counts("georgics", 1000, &[("septem", 2), ("octo", 1)]),
            counts("aeneid", 2000, &[("septem", 1), ("octo", 1)]),
        ];

        let comparison = compare_documents(&inputs, &RateConfig::default());
        let names: Vec<_> = comparison.ranking.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["georgics", "aeneid", "eclogues"]);
        assert_eq!(comparison.ranking[0].total_rate, RateValue::Value(3.0));
        assert_eq!(comparison.ranking[2].rank, 3);

        // per-document rates stay in input order
        assert_eq!(comparison.documents[0].name, "eclogues");
        assert_eq!(comparison.documents[0].rates[0].rate, RateValue::Value(0.14));
        assert_eq!(comparison.documents[0].rates[1].rate, RateValue::Value(0.0));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let inputs = vec![
            counts("first", 100, &[("sex", 1)]),
            counts("second", 200, &[("sex", 2)]),
            counts("third", 100, &[("sex", 1)]),
        ];

        let comparison = compare_documents(&inputs, &RateConfig::default());
        let names: Vec<_> = comparison.ranking.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_empty_document_is_skipped_and_last() {
        let inputs = vec![
            counts("empty", 0, &[("sex", 0)]),
            counts("full", 50, &[("sex", 0)]),
        ];

        let comparison = compare_documents(&inputs, &RateConfig::default());
        assert_eq!(comparison.ranking[0].name, "full");
        assert_eq!(comparison.ranking[1].name, "empty");
        assert!(comparison.ranking[1].total_rate.is_skipped());
        assert!(comparison.documents[0].rates[0].rate.is_skipped());
        assert!(comparison.documents[0].total_rate.is_skipped());
    }

    #[test]
    fn test_overflowing_total_is_skipped_and_last() {
        let inputs = vec![
            counts("huge", 1, &[("sex", 1)]),
            counts("plain", 1, &[("sex", 0)]),
        ];
        let config = RateConfig::new(1e308, 2).unwrap();

        let comparison = compare_documents(&inputs, &config);
        assert_eq!(comparison.ranking[0].name, "plain");
        assert_eq!(comparison.ranking[0].total_rate, RateValue::Value(0.0));
        assert_eq!(comparison.ranking[1].name, "huge");
        assert!(comparison.ranking[1].total_rate.is_skipped());
    }
}
