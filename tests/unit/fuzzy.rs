//! N-grams, edit distance and approximate matching against the fixture.

use crate::common::{fixture_index, frozen_fixture_index};
use siftdex::{add_keywords, edit_distance, ngrams, ngrams_for_parts, Index, IndexError};

#[test]
fn test_ngrams_informatik_all_sizes() {
    let expected: [&[&str]; 7] = [
        &["#inf", "info", "nfor", "form", "orma", "rmat", "mati", "atik", "tik#"],
        &["#info", "infor", "nform", "forma", "ormat", "rmati", "matik", "atik#"],
        &["#infor", "inform", "nforma", "format", "ormati", "rmatik", "matik#"],
        &["#inform", "informa", "nformat", "formati", "ormatik", "rmatik#"],
        &["#informa", "informat", "nformati", "formatik", "ormatik#"],
        &["#informat", "informati", "nformatik", "formatik#"],
        &["#informati", "informatik", "nformatik#"],
    ];
    for (offset, grams) in expected.iter().enumerate() {
        assert_eq!(ngrams("informatik", offset + 4), *grams, "n = {}", offset + 4);
    }
}

#[test]
fn test_ngram_count() {
    for n in 2..8 {
        for word in ["a", "ab", "tesla", "westinghouse"] {
            let expected = (word.len() + 3).saturating_sub(n);
            let expected = if expected < 2 { 0 } else { expected };
            assert_eq!(ngrams(word, n).len(), expected, "{} n={}", word, n);
        }
    }
}

#[test]
fn test_wildcard_parts() {
    assert_eq!(
        ngrams_for_parts(&["tes", "la"], 3),
        vec!["#te", "tes", "la#"]
    );
    assert!(ngrams_for_parts(&[], 3).is_empty());
}

#[test]
fn test_edit_distance_is_symmetric_on_fixture_words() {
    let words = ["tesla", "edison", "google", "lamme", "westinghouse", "haystack"];
    for a in words {
        for b in words {
            assert_eq!(edit_distance(a, b), edit_distance(b, a));
        }
    }
}

#[test]
fn test_approximate_matches_on_fixture() {
    let index = frozen_fixture_index();

    let found = index.approximate_matches("Tesle", 1).unwrap();
    let names: Vec<&str> = found.matches.iter().map(|m| m.keyword.as_str()).collect();
    assert_eq!(names, vec!["tesla"]);

    let found = index.approximate_matches("hidrogen", 1).unwrap();
    assert_eq!(found.matches.len(), 1);
    assert_eq!(found.matches[0].keyword, "hydrogen");
    assert_eq!(found.matches[0].distance, 1);

    let found = index.approximate_matches("zzzzzz", 2).unwrap();
    assert!(found.is_empty());
}

#[test]
fn test_approximate_matches_requires_ngrams() {
    let index = fixture_index();
    assert!(matches!(
        index.approximate_matches("tesla", 1),
        Err(IndexError::NGramsNotBuilt)
    ));
}

#[test]
fn test_keyword_list_experiment() {
    let mut index = Index::new();
    add_keywords("board\nbread\nbeard\nbroad\nboard\n", &mut index).unwrap();
    assert_eq!(index.num_keywords(), 4);
    index.build_ngrams(3).unwrap();

    let names = |max_ed| -> Vec<String> {
        index
            .approximate_matches("board", max_ed)
            .unwrap()
            .matches
            .into_iter()
            .map(|m| m.keyword)
            .collect()
    };
    assert_eq!(names(0), vec!["board"]);
    assert_eq!(names(1), vec!["board", "beard"]);

    // "broad" is two edits away but shares no 3-gram with "board", so it never
    // becomes a candidate.
    let found = index.approximate_matches("board", 2).unwrap();
    assert_eq!(found.candidates, 2);
    assert!(found.matches.iter().all(|m| m.keyword != "broad"));
}
