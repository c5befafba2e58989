// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for CSV ingestion.
//!
//! Arbitrary text must either be rejected with an error or produce an index
//! whose postings point at their keywords inside the record text.

#![no_main]

use libfuzzer_sys::fuzz_target;
use siftdex::{add_records_from_csv, Bm25Params, Index};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let mut index = Index::new();
    if add_records_from_csv(&text, &mut index).is_err() {
        return;
    }

    let total: usize = index.records().iter().map(|r| r.content.len()).sum();
    assert_eq!(total, index.total_size());

    for keyword in index.keywords() {
        for pair in keyword.items.windows(2) {
            assert!(pair[0].record_id < pair[1].record_id);
        }
        for item in &keyword.items {
            let content = &index.record(item.record_id).content;
            for &pos in &item.positions {
                let text = content
                    .get(pos..pos + item.size)
                    .expect("posting inside record");
                assert_eq!(text.to_ascii_lowercase(), keyword.name);
            }
        }
    }

    index
        .compute_scores(Bm25Params::default())
        .expect("ingested postings are sorted");
    for item in index.keywords().iter().flat_map(|k| &k.items) {
        assert!(item.score.is_finite());
    }
});
