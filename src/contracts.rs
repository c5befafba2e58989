// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the index invariants.
//!
//! Two kinds of checks live here:
//!
//! 1. `check_*` functions use `debug_assert!` and cost nothing in release
//!    builds. They guard the merge engine's sortedness assumption and the shape
//!    of ranked output.
//! 2. `verify_*` functions always run and return an [`IndexError`]. They sit on
//!    the ingestion → frozen phase boundary, where a violated ordering
//!    precondition would otherwise silently corrupt every later intersection.
//!
//! | Contract                      | Invariant                                        |
//! |-------------------------------|--------------------------------------------------|
//! | `check_sorted_by_key`         | merge input is non-decreasing by key             |
//! | `verify_postings_sorted`      | items ascending by record, positions ascending   |
//! | `check_item_within_record`    | every position + size fits in the record content |
//! | `check_ranked_output`         | ranked groups are contiguous, scores ascending   |

use crate::error::{IndexError, Result};
use crate::merge::MergeKey;
use crate::types::{Item, Keyword, Record};

// ============================================================================
// MERGE CONTRACTS
// ============================================================================

/// Check that a merge input list is sorted by its merge key.
///
/// # Panics (debug builds only)
/// Panics at the first descending adjacent pair.
#[inline]
pub fn check_sorted_by_key<T: MergeKey>(list: &[T]) {
    if cfg!(debug_assertions) {
        for i in 1..list.len() {
            debug_assert!(
                list[i - 1].merge_key() <= list[i].merge_key(),
                "Contract violation: merge input not sorted at {} ({} > {})",
                i,
                list[i - 1].merge_key(),
                list[i].merge_key()
            );
        }
    }
}

// ============================================================================
// POSTING CONTRACTS
// ============================================================================

/// Verify the posting-order precondition for every keyword.
///
/// Ingestion only appends, so items come out ascending by record id as long as
/// records are ingested in id order and each record's keywords left to right.
/// Anything that bypasses that order (hand-built postings, out-of-order
/// `add_item` calls) is caught here instead of producing wrong intersections.
pub fn verify_postings_sorted(keywords: &[Keyword]) -> Result<()> {
    for keyword in keywords {
        for (i, pair) in keyword.items.windows(2).enumerate() {
            if pair[0].record_id >= pair[1].record_id {
                return Err(IndexError::UnsortedPostings {
                    keyword: keyword.name.clone(),
                    position: i + 1,
                });
            }
        }
        for (i, item) in keyword.items.iter().enumerate() {
            if item.positions.is_empty() || item.positions.windows(2).any(|w| w[0] >= w[1]) {
                return Err(IndexError::UnsortedPostings {
                    keyword: keyword.name.clone(),
                    position: i,
                });
            }
        }
    }
    Ok(())
}

/// Check that an item's occurrences lie inside its record.
///
/// # Panics (debug builds only)
/// Panics if the record id is unknown or an occurrence runs past the content.
#[inline]
pub fn check_item_within_record(item: &Item, records: &[Record]) {
    debug_assert!(
        item.record_id.as_usize() < records.len(),
        "Contract violation: item record_id {} >= records.len() {}",
        item.record_id,
        records.len()
    );

    if let Some(record) = records.get(item.record_id.as_usize()) {
        for &pos in &item.positions {
            debug_assert!(
                pos + item.size <= record.content.len(),
                "Contract violation: occurrence {}+{} past end of record {} ({} bytes)",
                pos,
                item.size,
                item.record_id,
                record.content.len()
            );
        }
    }
}

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// Check the shape of ranked output.
///
/// Items of one record are contiguous and share the record's aggregate score.
/// Groups appear in reverse rank order, so aggregates never decrease.
///
/// # Panics (debug builds only)
/// Panics if a record appears in two groups or the aggregates decrease.
#[inline]
pub fn check_ranked_output(items: &[Item]) {
    if cfg!(debug_assertions) {
        let mut seen = std::collections::HashSet::new();
        for i in 0..items.len() {
            let starts_group = i == 0 || items[i - 1].record_id != items[i].record_id;
            if starts_group {
                debug_assert!(
                    seen.insert(items[i].record_id),
                    "Contract violation: record {} appears in two ranked groups",
                    items[i].record_id
                );
                if i > 0 {
                    debug_assert!(
                        items[i - 1].score <= items[i].score,
                        "Contract violation: ranked output not in reverse rank order at {}",
                        i
                    );
                }
            } else {
                debug_assert!(
                    items[i - 1].score == items[i].score,
                    "Contract violation: items of record {} carry different aggregates",
                    items[i].record_id
                );
            }
        }
    }
}
