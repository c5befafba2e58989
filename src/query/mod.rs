// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query answering over a frozen index.
//!
//! ```text
//!   "tesla edison" ─► split ─► posting lists ─► intersect ─► rank ─► Answer
//!                                  ▲
//!            fuzzy: term ─► approximate_matches ─► merge candidates' lists
//! ```
//!
//! The processor borrows the index immutably and keeps no state between
//! calls. Diagnostics travel in the returned [`Answer`].

use crate::error::Result;
use crate::fuzzy::FuzzyMatch;
use crate::index::Index;
use crate::merge::{intersect, merge};
use crate::scoring::rank;
use crate::tokenizer::{split, WHITESPACE, WILDCARD};
use crate::types::{Item, RecordId};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::debug;

/// Result of one query.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Answer {
    /// Ranked items in reverse rank order (best record last); each item's
    /// `score` is its record's aggregate.
    pub items: Vec<Item>,
    /// Distinct records matching every known term, before truncation.
    pub records_found: usize,
    /// Wall time spent answering.
    pub duration: Duration,
    /// Fuzzy queries only: the keywords each term expanded to.
    pub expansions: Vec<Expansion>,
}

impl Answer {
    /// Distinct records in output order.
    pub fn record_ids(&self) -> Vec<RecordId> {
        let mut ids = Vec::new();
        for item in &self.items {
            if ids.last() != Some(&item.record_id) {
                ids.push(item.record_id);
            }
        }
        ids
    }
}

/// The keywords a fuzzy query term resolved to.
#[derive(Debug, Clone, Serialize)]
pub struct Expansion {
    pub term: String,
    pub matches: Vec<FuzzyMatch>,
}

/// Default fuzzy tolerance: one edit per five characters, rounded up.
pub fn default_max_ed(term: &str) -> usize {
    term.chars().count().div_ceil(5)
}

/// Tolerance for one fuzzy term: `max_ed` if set, else [`default_max_ed`] of
/// the term with surrounding wildcards trimmed.
pub fn term_tolerance(term: &str, max_ed: Option<usize>) -> usize {
    max_ed.unwrap_or_else(|| default_max_ed(term.trim_matches('*')))
}

/// Answers queries against a borrowed index.
#[derive(Debug, Clone, Copy)]
pub struct QueryProcessor<'a> {
    index: &'a Index,
}

impl<'a> QueryProcessor<'a> {
    pub fn new(index: &'a Index) -> Self {
        Self { index }
    }

    /// Boolean-AND query over exact terms, ranked, at most `max_records` records.
    ///
    /// Terms are whitespace-separated and case-insensitive. Unknown terms are
    /// ignored; a query with no known term matches nothing.
    pub fn answer(&self, query: &str, max_records: usize) -> Answer {
        let start = Instant::now();
        let lists: Vec<&[Item]> = split(query, WHITESPACE)
            .into_iter()
            .map(|term| self.index.items(term))
            .filter(|items| !items.is_empty())
            .collect();

        let matched = intersect(&lists);
        let items = rank(&matched.items, max_records, lists.len());
        let duration = start.elapsed();

        debug!(
            query,
            known_terms = lists.len(),
            records_found = matched.num_matches,
            duration_us = duration.as_micros() as u64,
            "answered query"
        );

        Answer {
            items,
            records_found: matched.num_matches,
            duration,
            expansions: Vec::new(),
        }
    }

    /// Like [`answer`](Self::answer), but each term matches every keyword
    /// within `max_ed` edits (`None`: [`default_max_ed`] of the term). Terms
    /// containing `*` are wildcard patterns.
    ///
    /// Terms without any fuzzy match are ignored, as unknown terms are in
    /// exact queries.
    pub fn answer_fuzzy(
        &self,
        query: &str,
        max_records: usize,
        max_ed: Option<usize>,
    ) -> Result<Answer> {
        let start = Instant::now();
        let terms = split(query, WHITESPACE);

        let mut expansions = Vec::with_capacity(terms.len());
        let mut per_term: Vec<Vec<&Item>> = Vec::with_capacity(terms.len());
        for term in terms {
            let found = self
                .index
                .approximate_matches(term, term_tolerance(term, max_ed))?;
            if found.is_empty() {
                continue;
            }
            let candidate_lists: Vec<&[Item]> = found
                .keyword_ids()
                .map(|id| self.index.keyword(id).items.as_slice())
                .collect();
            per_term.push(merge(&candidate_lists));
            expansions.push(Expansion {
                term: term.to_string(),
                matches: found.matches,
            });
        }

        let lists: Vec<&[&Item]> = per_term.iter().map(Vec::as_slice).collect();
        let matched = intersect(&lists);
        let grouped: Vec<&Item> = matched.items.into_iter().copied().collect();
        let items = rank(&grouped, max_records, lists.len());
        let duration = start.elapsed();

        debug!(
            query,
            expanded_terms = expansions.len(),
            records_found = matched.num_matches,
            duration_us = duration.as_micros() as u64,
            "answered fuzzy query"
        );

        Ok(Answer {
            items,
            records_found: matched.num_matches,
            duration,
            expansions,
        })
    }

    /// Whether `query` should take the fuzzy path: any term has a wildcard.
    pub fn has_wildcard(query: &str) -> bool {
        query.contains(WILDCARD)
    }
}
