//! Boolean-AND query correctness over the Tesla fixture.

use crate::common::{frozen_fixture_index, records_with_all_terms};
use siftdex::{QueryProcessor, RecordId};
use std::collections::BTreeSet;

fn record_set(ids: Vec<RecordId>) -> BTreeSet<RecordId> {
    ids.into_iter().collect()
}

#[test]
fn test_unknown_or_disjoint_terms_match_nothing() {
    let index = frozen_fixture_index();
    let qp = QueryProcessor::new(&index);
    for query in ["Nebuchad", "atoms motor", "", "   \t "] {
        let answer = qp.answer(query, 10);
        assert!(answer.items.is_empty(), "{:?}", query);
        assert_eq!(answer.records_found, 0, "{:?}", query);
    }
}

#[test]
fn test_unknown_terms_are_ignored() {
    let index = frozen_fixture_index();
    let qp = QueryProcessor::new(&index);
    let expected = record_set(vec![RecordId(4), RecordId(5)]);

    for query in ["Tesla 33 Edison", "hmm? Tesla  \ta Edison"] {
        let answer = qp.answer(query, 10);
        assert_eq!(answer.records_found, 2, "{:?}", query);
        assert_eq!(record_set(answer.record_ids()), expected);
        // One item per known term per record.
        assert_eq!(answer.items.len(), 4);
    }
}

#[test]
fn test_single_term_covers_every_posting() {
    let index = frozen_fixture_index();
    let qp = QueryProcessor::new(&index);
    let answer = qp.answer("tesla", usize::MAX);

    assert_eq!(answer.records_found, 6);
    assert_eq!(answer.items.len(), 6);
    let occurrences: usize = answer.items.iter().map(|i| i.positions.len()).sum();
    assert_eq!(occurrences, 7);
    assert!(!answer.record_ids().contains(&RecordId(6)));
}

#[test]
fn test_items_follow_query_term_order() {
    let index = frozen_fixture_index();
    let qp = QueryProcessor::new(&index);

    let answer = qp.answer("tesla atoms", 10);
    assert_eq!(answer.record_ids(), vec![RecordId(0)]);
    let positions: Vec<&[usize]> = answer.items.iter().map(|i| i.positions.as_slice()).collect();
    assert_eq!(positions, vec![&[98][..], &[65][..]]);

    let answer = qp.answer("atoms tesla", 10);
    let positions: Vec<&[usize]> = answer.items.iter().map(|i| i.positions.as_slice()).collect();
    assert_eq!(positions, vec![&[65][..], &[98][..]]);
}

#[test]
fn test_repeated_occurrences_stay_in_one_item() {
    let index = frozen_fixture_index();
    let qp = QueryProcessor::new(&index);
    let answer = qp.answer("Google", 10);
    assert_eq!(answer.record_ids(), vec![RecordId(2)]);
    assert_eq!(answer.items.len(), 1);
    assert_eq!(answer.items[0].positions, vec![18, 102]);
}

#[test]
fn test_long_query() {
    let index = frozen_fixture_index();
    let qp = QueryProcessor::new(&index);
    let answer = qp.answer("Google birthday doodle Tesla Legacy", 10);
    assert_eq!(answer.record_ids(), vec![RecordId(2)]);
    assert_eq!(answer.items.len(), 5);
    let occurrences: usize = answer.items.iter().map(|i| i.positions.len()).sum();
    assert_eq!(occurrences, 7);
}

#[test]
fn test_matches_scan_oracle() {
    let index = frozen_fixture_index();
    let qp = QueryProcessor::new(&index);
    let queries: [&[&str]; 6] = [
        &["tesla"],
        &["legacy", "honors"],
        &["the", "tesla"],
        &["haystack", "needle", "edison"],
        &["hydrogen", "magnet"],
        &["was", "he"],
    ];
    for terms in queries {
        let answer = qp.answer(&terms.join(" "), usize::MAX);
        let expected = records_with_all_terms(&index, terms);
        assert_eq!(record_set(answer.record_ids()), expected, "{:?}", terms);
        assert_eq!(answer.records_found, expected.len());
    }
}

#[test]
fn test_answer_on_weird_record() {
    let index = frozen_fixture_index();
    let qp = QueryProcessor::new(&index);
    // The two "Weird" lines were merged into one record.
    let answer = qp.answer("ME73 mac", 10);
    assert_eq!(answer.record_ids(), vec![RecordId(6)]);
    assert_eq!(answer.items[1].positions, vec![25]);
}
