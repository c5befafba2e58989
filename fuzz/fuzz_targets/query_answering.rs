// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for exact and fuzzy queries.
//!
//! Arbitrary queries against the fixture collection must never panic, and
//! ranked output must respect the requested record limit.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use siftdex::testing::frozen_fixture_index;
use siftdex::{Index, QueryProcessor};
use std::sync::OnceLock;

static INDEX: OnceLock<Index> = OnceLock::new();

#[derive(Debug, Arbitrary)]
struct QueryInput {
    query: String,
    max_records: u8,
    max_ed: Option<u8>,
}

fuzz_target!(|input: QueryInput| {
    let index = INDEX.get_or_init(frozen_fixture_index);
    let qp = QueryProcessor::new(index);
    let query: String = input.query.chars().take(100).collect();
    let max = usize::from(input.max_records % 10);

    let answer = qp.answer(&query, max);
    assert!(answer.record_ids().len() <= max);
    assert!(answer.record_ids().len() <= answer.records_found);

    let max_ed = input.max_ed.map(|d| usize::from(d % 4));
    let fuzzy = qp
        .answer_fuzzy(&query, max, max_ed)
        .expect("fixture has an n-gram index");
    assert!(fuzzy.record_ids().len() <= max);
});
