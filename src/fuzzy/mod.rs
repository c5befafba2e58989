// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy keyword matching: n-gram candidates, edit-distance verification.
//!
//! ```text
//!   query ──split on *──► parts ──► n-grams ──► keyword-id lists
//!                                                     │ union
//!                                                     ▼
//!                                     (keyword id, shared n-grams)
//!                                                     │ overlap filter
//!                                                     ▼
//!                                  bounded edit distance ≤ max_ed
//! ```
//!
//! A keyword within edit distance `d` of the query shares at least
//! `max(|kw|, |q|) - d·n` n-grams with it, so everything below that overlap is
//! dropped without computing a distance. The padded word has `len - n + 3`
//! n-grams, so for `n <= 3` the filter never drops a true match; larger `n`
//! trades recall for fewer verifications. A keyword sharing no n-gram at all
//! with the query is never a candidate.

mod levenshtein;
mod ngram;

pub use levenshtein::{bounded_edit_distance, edit_distance, within_edit_distance};
pub use ngram::{ngrams, ngrams_for_parts, NGramIndex, PAD};

use crate::merge::union;
use crate::tokenizer::{split, WILDCARD};
use crate::types::{Keyword, KeywordId};
use serde::Serialize;
use std::time::{Duration, Instant};

/// One verified fuzzy match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FuzzyMatch {
    pub keyword_id: KeywordId,
    pub keyword: String,
    pub distance: usize,
}

/// Result of [`approximate_matches`], with the pipeline's counters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FuzzyMatches {
    /// Verified matches in keyword-id order.
    pub matches: Vec<FuzzyMatch>,
    /// Distinct keywords sharing at least one n-gram with the query.
    pub candidates: usize,
    /// Candidates that passed the overlap filter and had their distance computed.
    pub verifications: usize,
    /// Mean time per distance computation; zero when none ran.
    pub avg_verification_time: Duration,
}

impl FuzzyMatches {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn keyword_ids(&self) -> impl Iterator<Item = KeywordId> + '_ {
        self.matches.iter().map(|m| m.keyword_id)
    }
}

/// Find every keyword within `max_ed` edits of `query`.
///
/// `query` is lowercased first. A `*` in the query splits it into parts whose
/// n-grams are collected without the grams adjacent to the wildcard; the
/// overlap bound and the final distance still use the full query text.
pub fn approximate_matches(
    ngram_index: &NGramIndex,
    keywords: &[Keyword],
    query: &str,
    max_ed: usize,
) -> FuzzyMatches {
    let query = query.to_ascii_lowercase();
    let n = ngram_index.n();

    let parts = split(&query, WILDCARD);
    let grams = ngrams_for_parts(&parts, n);
    let lists: Vec<&[KeywordId]> = grams
        .iter()
        .map(|gram| ngram_index.keyword_ids(gram))
        .collect();
    let candidates = union(&lists);

    let query_len = query.chars().count();
    let slack = max_ed.saturating_mul(n);
    let mut matches = Vec::new();
    let mut verifications = 0usize;
    let start = Instant::now();

    for (keyword_id, overlap) in candidates.iter() {
        let keyword = &keywords[keyword_id.as_usize()];
        let longest = keyword.name.chars().count().max(query_len);
        if (overlap as usize) + slack < longest {
            continue;
        }
        verifications += 1;
        if let Some(distance) = bounded_edit_distance(&keyword.name, &query, max_ed) {
            matches.push(FuzzyMatch {
                keyword_id,
                keyword: keyword.name.clone(),
                distance,
            });
        }
    }

    let avg_verification_time = if verifications > 0 {
        start.elapsed() / verifications as u32
    } else {
        Duration::ZERO
    };

    tracing::debug!(
        query = %query,
        candidates = candidates.len(),
        verifications,
        matches = matches.len(),
        "approximate match"
    );

    FuzzyMatches {
        matches,
        candidates: candidates.len(),
        verifications,
        avg_verification_time,
    }
}
