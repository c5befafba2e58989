// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! N-gram decomposition and the n-gram → keyword index.
//!
//! A word is padded with one `#` on each side and cut into every window of `n`
//! characters:
//!
//! ```text
//!   "hallo", n = 3   →   #hallo#   →   #ha  hal  all  llo  lo#
//! ```
//!
//! A padded word of `len + 2` characters has `len - n + 3` windows. Fewer than
//! two windows means the word is too short for this `n` and yields nothing.

use crate::error::{IndexError, Result};
use crate::types::{Keyword, KeywordId};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::HashMap;

/// Boundary marker padded onto both ends of a word.
pub const PAD: char = '#';

/// All n-grams of `word`, in order.
///
/// # Panics
///
/// Panics if `n < 2`.
pub fn ngrams(word: &str, n: usize) -> Vec<String> {
    assert!(n >= 2, "n-gram size must be at least 2, got {}", n);

    let padded: Vec<char> = std::iter::once(PAD)
        .chain(word.chars())
        .chain(std::iter::once(PAD))
        .collect();
    if padded.len() < n + 1 {
        return Vec::new();
    }
    padded.windows(n).map(|w| w.iter().collect()).collect()
}

/// N-grams of a wildcard pattern, given its parts.
///
/// Every part contributes its n-grams, except that an n-gram touching a
/// wildcard is dropped: the first n-gram of every part but the first, and the
/// last n-gram of every part but the last. Those carry a `#` where the pattern
/// actually continues.
pub fn ngrams_for_parts(parts: &[&str], n: usize) -> Vec<String> {
    let mut result = Vec::new();
    let last = parts.len().saturating_sub(1);
    for (i, part) in parts.iter().enumerate() {
        let grams = ngrams(part, n);
        if grams.is_empty() {
            continue;
        }
        let beg = usize::from(i != 0);
        let end = grams.len() - usize::from(i != last);
        if beg < end {
            result.extend_from_slice(&grams[beg..end]);
        }
    }
    result
}

/// Inverted index from n-gram to the ids of the keywords containing it.
///
/// Lists are ascending by keyword id. A keyword appears once per occurrence of
/// the n-gram, so `"tata"` is listed twice under `"ta"`; the union pass counts
/// those repeats as overlap.
#[derive(Debug, Clone, Default)]
pub struct NGramIndex {
    n: usize,
    lists: HashMap<String, Vec<KeywordId>>,
}

impl NGramIndex {
    /// Build the index over `keywords`, which must be in id order.
    pub fn build(keywords: &[Keyword], n: usize) -> Result<Self> {
        if n < 2 {
            return Err(IndexError::InvalidNGramSize(n));
        }

        #[cfg(feature = "parallel")]
        let decomposed: Vec<(KeywordId, Vec<String>)> = keywords
            .par_iter()
            .map(|kw| (kw.id, ngrams(&kw.name, n)))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let decomposed: Vec<(KeywordId, Vec<String>)> = keywords
            .iter()
            .map(|kw| (kw.id, ngrams(&kw.name, n)))
            .collect();

        // Sequential fold keeps every list in keyword-id order.
        let mut lists: HashMap<String, Vec<KeywordId>> = HashMap::new();
        for (id, grams) in decomposed {
            for gram in grams {
                lists.entry(gram).or_default().push(id);
            }
        }

        Ok(Self { n, lists })
    }

    /// The `n` this index was built with.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Keyword ids containing `ngram`; empty if the n-gram is unknown.
    pub fn keyword_ids(&self, ngram: &str) -> &[KeywordId] {
        self.lists.get(ngram).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct n-grams.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}
