// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! BM25 term weights.
//!
//! ```text
//!                 tf · (k + 1)
//!   w = ───────────────────────────────────── · log2(N / df)
//!        k · (1 - b + b · |record| / avg) + tf
//! ```
//!
//! `tf` is the item's raw occurrence count, `N` the number of records, `df` the
//! number of records containing the keyword and `avg` the mean record length in
//! bytes. `b` controls length normalisation, `k` term-frequency saturation.
//!
//! # Invariants
//!
//! - A keyword present in every record has `idf = 0`, so all its weights are 0.
//! - For fixed length and idf > 0, the weight grows with `tf` and is bounded by
//!   `(k + 1) · idf`.
//! - For fixed `tf` and idf > 0 (with `b > 0`), longer records weigh less.

use crate::error::{IndexError, Result};
use crate::types::{Keyword, Record};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Default length normalisation.
pub const DEFAULT_B: f32 = 0.75;
/// Default term-frequency saturation.
pub const DEFAULT_K: f32 = 1.75;

/// BM25 tuning parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bm25Params {
    pub b: f32,
    pub k: f32,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self {
            b: DEFAULT_B,
            k: DEFAULT_K,
        }
    }
}

impl Bm25Params {
    pub fn new(b: f32, k: f32) -> Result<Self> {
        let params = Self { b, k };
        params.validate()?;
        Ok(params)
    }

    /// `0 ≤ b ≤ 1`, `k > 0`, both finite.
    pub fn validate(&self) -> Result<()> {
        let ok = self.b.is_finite()
            && self.k.is_finite()
            && (0.0..=1.0).contains(&self.b)
            && self.k > 0.0;
        if ok {
            Ok(())
        } else {
            Err(IndexError::InvalidBm25Params {
                b: self.b,
                k: self.k,
            })
        }
    }
}

/// Inverse record frequency, `log2(num_records / record_freq)`.
#[inline]
pub fn idf(num_records: usize, record_freq: usize) -> f32 {
    debug_assert!(
        (1..=num_records).contains(&record_freq),
        "Contract violation: record_freq {} outside 1..={}",
        record_freq,
        num_records
    );
    (num_records as f32 / record_freq as f32).log2()
}

/// Weight of one item.
#[inline]
pub fn bm25_weight(
    tf: f32,
    record_size: f32,
    avg_record_size: f32,
    idf: f32,
    params: Bm25Params,
) -> f32 {
    let length_ratio = if avg_record_size > 0.0 {
        record_size / avg_record_size
    } else {
        1.0
    };
    let norm = params.k * (1.0 - params.b + params.b * length_ratio);
    tf * (params.k + 1.0) / (norm + tf) * idf
}

/// Replace every item's raw term frequency with its BM25 weight.
///
/// `total_size` is the summed byte length of all records. Keywords without
/// items are left alone. Runs one task per keyword under the `parallel`
/// feature.
pub fn compute_scores(
    keywords: &mut [Keyword],
    records: &[Record],
    total_size: usize,
    params: Bm25Params,
) {
    if records.is_empty() {
        return;
    }
    let num_records = records.len();
    let avg = total_size as f32 / num_records as f32;

    let score_keyword = |keyword: &mut Keyword| {
        // Registered without any occurrence: nothing to weigh.
        if keyword.items.is_empty() {
            return;
        }
        let keyword_idf = idf(num_records, keyword.record_freq());
        for item in &mut keyword.items {
            let record_size = records[item.record_id.as_usize()].content.len() as f32;
            item.score = bm25_weight(item.score, record_size, avg, keyword_idf, params);
        }
    };

    #[cfg(feature = "parallel")]
    keywords.par_iter_mut().for_each(score_keyword);
    #[cfg(not(feature = "parallel"))]
    keywords.iter_mut().for_each(score_keyword);
}
