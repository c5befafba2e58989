//! Reference oracles for differential testing.
//!
//! Simple implementations whose correctness is evident by inspection. They
//! trade every bit of performance for clarity.

use proptest::prelude::*;
use siftdex::Item;
use std::collections::{BTreeMap, BTreeSet};

// =============================================================================
// ORACLE IMPLEMENTATIONS
// =============================================================================

/// Distinct values with their total occurrence counts across all lists.
pub fn oracle_union(lists: &[Vec<u32>]) -> (Vec<u32>, Vec<u32>) {
    let mut counts: BTreeMap<u32, u32> = BTreeMap::new();
    for value in lists.iter().flatten() {
        *counts.entry(*value).or_default() += 1;
    }
    counts.into_iter().unzip()
}

/// For every key present in all lists, all elements with that key, grouped
/// by key and ordered by list within a group.
pub fn oracle_intersect(lists: &[Vec<u32>]) -> Vec<u32> {
    let Some((first, rest)) = lists.split_first() else {
        return Vec::new();
    };
    let common: BTreeSet<u32> = first
        .iter()
        .copied()
        .filter(|k| rest.iter().all(|list| list.contains(k)))
        .collect();
    common
        .into_iter()
        .flat_map(|key| {
            lists
                .iter()
                .flat_map(move |list| list.iter().copied().filter(move |&v| v == key))
        })
        .collect()
}

/// Record ids of the best `max` groups: aggregate descending, id ascending.
pub fn oracle_top_records(items: &[Item], max: usize) -> Vec<u32> {
    let mut groups: Vec<(u32, f32)> = Vec::new();
    for item in items {
        match groups.last_mut() {
            Some((id, score)) if *id == item.record_id.0 => *score += item.score,
            _ => groups.push((item.record_id.0, item.score)),
        }
    }
    groups.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    groups.into_iter().take(max).map(|(id, _)| id).collect()
}

// =============================================================================
// STRATEGIES
// =============================================================================

/// A sorted id list, duplicates allowed.
pub fn sorted_list() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..40, 0..25).prop_map(|mut v| {
        v.sort_unstable();
        v
    })
}

/// Lowercase words over a small alphabet, so near misses are common.
pub fn small_alphabet_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{2,8}").unwrap()
}

/// Items grouped by record, each record once, ids ascending.
pub fn grouped_items() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::btree_map(0u32..50, prop::collection::vec(0u32..20, 1..4), 0..20).prop_map(
        |groups| {
            groups
                .into_iter()
                .flat_map(|(record, scores)| {
                    scores.into_iter().map(move |s| {
                        let mut item = Item::new(siftdex::RecordId(record), 0, 3);
                        item.score = s as f32 * 0.25;
                        item
                    })
                })
                .collect()
        },
    )
}
