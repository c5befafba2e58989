//! Index construction and exact queries over random collections.

use crate::common::{assert_index_well_formed, index_from_lines, records_with_all_terms};
use proptest::prelude::*;
use siftdex::{Phase, QueryProcessor, RecordId};
use std::collections::BTreeSet;

/// Words mixing letters and digits; some are not keywords at all.
fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-f0-9]{1,6}").unwrap()
}

fn contents() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::collection::vec(word(), 1..12).prop_map(|words| words.join(" ")),
        1..8,
    )
}

fn build(contents: &[String]) -> siftdex::Index {
    let urls: Vec<String> = (0..contents.len()).map(|i| format!("doc{}", i)).collect();
    let lines: Vec<(&str, &str)> = urls
        .iter()
        .map(String::as_str)
        .zip(contents.iter().map(String::as_str))
        .collect();
    index_from_lines(&lines)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_index_well_formed(contents in contents()) {
        let index = build(&contents);
        prop_assert_eq!(index.num_records(), contents.len());
        prop_assert_eq!(index.phase(), Phase::Frozen);
        assert_index_well_formed(&index);

        let total: usize = contents.iter().map(|c| c.len() + 1).sum();
        prop_assert_eq!(index.total_size(), total);
    }

    #[test]
    fn prop_scores_finite_and_non_negative(contents in contents()) {
        let index = build(&contents);
        for keyword in index.keywords() {
            for item in &keyword.items {
                prop_assert!(item.score.is_finite());
                prop_assert!(item.score >= 0.0);
            }
        }
    }

    #[test]
    fn prop_answer_matches_scan(
        contents in contents(),
        terms in prop::collection::vec(word(), 1..4),
    ) {
        let index = build(&contents);
        let terms: Vec<&str> = terms.iter().map(String::as_str).collect();
        let answer = QueryProcessor::new(&index).answer(&terms.join(" "), usize::MAX);

        let found: BTreeSet<RecordId> = answer.record_ids().into_iter().collect();
        let expected = records_with_all_terms(&index, &terms);
        prop_assert_eq!(answer.records_found, expected.len());
        prop_assert_eq!(found, expected);
    }
}
