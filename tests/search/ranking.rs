//! Ranking of query results: truncation, order, and aggregate scores.

use crate::common::{fixture_index, frozen_fixture_index, ranked_records};
use siftdex::contracts::check_ranked_output;
use siftdex::{QueryProcessor, RecordId};
use std::collections::BTreeSet;

#[test]
fn test_truncates_to_max_records() {
    let index = frozen_fixture_index();
    let qp = QueryProcessor::new(&index);
    for max in 1..=7 {
        let answer = qp.answer("tesla", max);
        assert_eq!(answer.records_found, 6);
        assert_eq!(ranked_records(&answer.items).len(), max.min(6));
    }
}

#[test]
fn test_best_record_is_last() {
    let index = frozen_fixture_index();
    let qp = QueryProcessor::new(&index);
    let answer = qp.answer("tesla", 10);

    let best = index
        .items("tesla")
        .iter()
        .max_by(|a, b| a.score.total_cmp(&b.score).then(b.record_id.cmp(&a.record_id)))
        .map(|i| i.record_id);
    assert_eq!(answer.items.last().map(|i| i.record_id), best);

    for pair in answer.items.windows(2) {
        assert!(pair[0].score <= pair[1].score);
    }
    check_ranked_output(&answer.items);
}

#[test]
fn test_scores_are_record_aggregates() {
    let index = frozen_fixture_index();
    let qp = QueryProcessor::new(&index);
    let answer = qp.answer("tesla edison", 10);

    for record in answer.record_ids() {
        let expected: f32 = ["tesla", "edison"]
            .iter()
            .flat_map(|t| index.items(t))
            .filter(|i| i.record_id == record)
            .map(|i| i.score)
            .sum();
        for item in answer.items.iter().filter(|i| i.record_id == record) {
            assert!((item.score - expected).abs() < 1e-5);
        }
    }
}

#[test]
fn test_term_frequency_ranking_before_scoring() {
    // Unscored items carry their occurrence count.
    let index = fixture_index();
    let qp = QueryProcessor::new(&index);

    let answer = qp.answer("tesla", 1);
    assert_eq!(ranked_records(&answer.items), vec![2]);
    assert_eq!(answer.items[0].score, 2.0);

    // Among the single-occurrence records the lowest id wins the tie.
    let answer = qp.answer("tesla", 2);
    assert_eq!(ranked_records(&answer.items), vec![0, 2]);
}

#[test]
fn test_scoring_does_not_change_matches() {
    let raw = fixture_index();
    let scored = frozen_fixture_index();
    for query in ["tesla", "tesla edison", "legacy honors", "the"] {
        let before: BTreeSet<RecordId> = QueryProcessor::new(&raw)
            .answer(query, usize::MAX)
            .record_ids()
            .into_iter()
            .collect();
        let after: BTreeSet<RecordId> = QueryProcessor::new(&scored)
            .answer(query, usize::MAX)
            .record_ids()
            .into_iter()
            .collect();
        assert_eq!(before, after, "{:?}", query);
    }
}

#[test]
fn test_answer_is_deterministic() {
    let index = frozen_fixture_index();
    let qp = QueryProcessor::new(&index);
    let first = qp.answer("the tesla", 3);
    for _ in 0..5 {
        let again = qp.answer("the tesla", 3);
        assert_eq!(again.items, first.items);
    }
}
