// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: top-k records from grouped intersection output.
//!
//! ```text
//!   items:  [r2 a] [r2 b] [r5 a] [r5 b] [r9 a] [r9 b]
//!   groups:  r2: 1.3        r5: 2.8        r9: 0.4
//!   top 2:   r5, r2      →  output: r2 a, r2 b, r5 a, r5 b
//! ```
//!
//! Only the top `max` groups are ordered: an O(g) selection followed by an
//! O(max log max) sort of the prefix. Output runs in reverse rank order, the
//! best record last, and every item carries its record's aggregate score.
//!
//! Ties on the aggregate go to the lower record id.

use crate::contracts::check_ranked_output;
use crate::types::{Item, RecordId};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy)]
struct Group {
    record_id: RecordId,
    score: f32,
    start: usize,
}

/// Rank order: higher aggregate first, then lower record id.
fn by_rank(a: &Group, b: &Group) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.record_id.cmp(&b.record_id))
}

/// Select and order the best `max_records` records among grouped `items`.
///
/// `items` must have each record's items contiguous, as [`crate::merge::intersect`]
/// produces them. `num_terms` sizes the output buffer.
pub fn rank(items: &[&Item], max_records: usize, num_terms: usize) -> Vec<Item> {
    let mut groups: Vec<Group> = Vec::with_capacity(items.len() / num_terms.max(1));
    for (i, item) in items.iter().enumerate() {
        match groups.last_mut() {
            Some(group) if group.record_id == item.record_id => group.score += item.score,
            _ => groups.push(Group {
                record_id: item.record_id,
                score: item.score,
                start: i,
            }),
        }
    }

    let top = max_records.min(groups.len());
    if top == 0 {
        return Vec::new();
    }
    if top < groups.len() {
        groups.select_nth_unstable_by(top - 1, by_rank);
    }
    let best = &mut groups[..top];
    best.sort_unstable_by(by_rank);

    let mut result = Vec::with_capacity(top * num_terms.max(1));
    for group in best.iter().rev() {
        let members = items[group.start..]
            .iter()
            .take_while(|item| item.record_id == group.record_id);
        for item in members {
            let mut ranked = (*item).clone();
            ranked.score = group.score;
            result.push(ranked);
        }
    }

    check_ranked_output(&result);
    result
}
