// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Scoring is a one-time batch pass that rewrites every item's raw term
//! frequency into a BM25 weight. Ranking happens per query: the weights of a
//! record's matched items are summed and the best records are selected.

mod bm25;
pub mod ranking;

pub use bm25::*;
pub use ranking::rank;
