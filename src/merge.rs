// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! K-way merging over sorted lists.
//!
//! Exact queries intersect posting lists; fuzzy matching unions the keyword-id
//! lists of the query's n-grams. Both walk all lists at once with a min-heap
//! keyed by `(current key, list index)`, so the cost is
//! O(total elements · log(number of lists)) and no cross product is ever built.
//!
//! ```text
//!   list 0: [1, 4, 9]      heap: (1,0) (2,1) (4,2)
//!   list 1: [2, 4]    ──►  pop smallest, emit, advance that list, re-push
//!   list 2: [4, 7]
//! ```
//!
//! The lists are borrowed slices into index-owned storage. Outputs borrow from
//! the same storage; nothing is copied and nothing is mutated.

use crate::contracts::check_sorted_by_key;
use crate::types::{Item, KeywordId};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// The value two lists must agree on for their elements to merge.
pub trait MergeKey {
    fn merge_key(&self) -> u32;
}

impl MergeKey for Item {
    #[inline]
    fn merge_key(&self) -> u32 {
        self.record_id.0
    }
}

impl MergeKey for KeywordId {
    #[inline]
    fn merge_key(&self) -> u32 {
        self.0
    }
}

impl MergeKey for u32 {
    #[inline]
    fn merge_key(&self) -> u32 {
        *self
    }
}

impl<T: MergeKey + ?Sized> MergeKey for &T {
    #[inline]
    fn merge_key(&self) -> u32 {
        (**self).merge_key()
    }
}

/// Output of [`intersect`].
#[derive(Debug)]
pub struct Intersection<'a, T> {
    /// Every element of every list whose key is present in all lists, grouped
    /// by key in ascending key order. Within a group, elements appear in list
    /// order.
    pub items: Vec<&'a T>,
    /// Number of distinct keys present in all lists.
    pub num_matches: usize,
}

impl<T> Default for Intersection<'_, T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            num_matches: 0,
        }
    }
}

/// Boolean AND across sorted lists.
///
/// When the globally smallest head equals the most recently confirmed key, it
/// is another element of an already-matched group and is emitted directly.
/// Otherwise the key is confirmed only if every list currently points at it.
///
/// No lists, or any empty list, yields no matches.
pub fn intersect<'a, T: MergeKey>(lists: &[&'a [T]]) -> Intersection<'a, T> {
    if lists.is_empty() || lists.iter().any(|list| list.is_empty()) {
        return Intersection::default();
    }
    for list in lists {
        check_sorted_by_key(list);
    }

    let num_lists = lists.len();
    let shortest = lists.iter().map(|list| list.len()).min().unwrap_or(0);
    let mut cursors = vec![0usize; num_lists];
    let mut heap = BinaryHeap::with_capacity(num_lists);
    for (l, list) in lists.iter().enumerate() {
        heap.push(Reverse((list[0].merge_key(), l)));
    }

    let mut items = Vec::with_capacity(shortest * num_lists);
    let mut num_matches = 0;
    let mut last_match: Option<u32> = None;
    let mut exhausted = false;

    while let Some(Reverse((key, l))) = heap.pop() {
        if last_match != Some(key) {
            // An exhausted list can't contain any key from here on.
            if exhausted {
                break;
            }
            let all_agree = lists
                .iter()
                .zip(&cursors)
                .all(|(list, &c)| list.get(c).map(MergeKey::merge_key) == Some(key));
            if all_agree {
                num_matches += 1;
                last_match = Some(key);
            }
        }
        if last_match == Some(key) {
            items.push(&lists[l][cursors[l]]);
        }

        cursors[l] += 1;
        match lists[l].get(cursors[l]) {
            Some(next) => heap.push(Reverse((next.merge_key(), l))),
            None => exhausted = true,
        }
    }

    Intersection { items, num_matches }
}

/// Output of [`union`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Union<T> {
    /// Distinct ids, ascending.
    pub ids: Vec<T>,
    /// `freqs[i]` counts the occurrences of `ids[i]` across all lists,
    /// duplicates within one list included.
    pub freqs: Vec<u32>,
}

impl<T> Default for Union<T> {
    fn default() -> Self {
        Self {
            ids: Vec::new(),
            freqs: Vec::new(),
        }
    }
}

impl<T: Copy> Union<T> {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// `(id, frequency)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (T, u32)> + '_ {
        self.ids.iter().copied().zip(self.freqs.iter().copied())
    }
}

/// Merge sorted id lists into their distinct union, counting occurrences.
pub fn union<T: Ord + Copy>(lists: &[&[T]]) -> Union<T> {
    let mut heap = BinaryHeap::with_capacity(lists.len());
    let mut total = 0;
    for (l, list) in lists.iter().enumerate() {
        debug_assert!(
            list.windows(2).all(|w| w[0] <= w[1]),
            "Contract violation: union input {} is not sorted",
            l
        );
        if let Some(&first) = list.first() {
            heap.push(Reverse((first, l)));
            total += list.len();
        }
    }

    let mut cursors = vec![0usize; lists.len()];
    let mut ids: Vec<T> = Vec::with_capacity(total);
    let mut freqs: Vec<u32> = Vec::with_capacity(total);

    while let Some(Reverse((id, l))) = heap.pop() {
        if ids.last() != Some(&id) {
            ids.push(id);
            freqs.push(0);
        }
        if let Some(freq) = freqs.last_mut() {
            *freq += 1;
        }

        cursors[l] += 1;
        if let Some(&next) = lists[l].get(cursors[l]) {
            heap.push(Reverse((next, l)));
        }
    }

    Union { ids, freqs }
}

/// Ordered merge of sorted lists, keeping every element.
///
/// Equal keys come out in list order. Used to fold the posting lists of
/// several fuzzy candidates into a single per-term list.
pub fn merge<'a, T: MergeKey>(lists: &[&'a [T]]) -> Vec<&'a T> {
    let mut heap = BinaryHeap::with_capacity(lists.len());
    let mut total = 0;
    for (l, list) in lists.iter().enumerate() {
        check_sorted_by_key(list);
        if let Some(first) = list.first() {
            heap.push(Reverse((first.merge_key(), l)));
            total += list.len();
        }
    }

    let mut cursors = vec![0usize; lists.len()];
    let mut merged = Vec::with_capacity(total);
    while let Some(Reverse((_, l))) = heap.pop() {
        merged.push(&lists[l][cursors[l]]);
        cursors[l] += 1;
        if let Some(next) = lists[l].get(cursors[l]) {
            heap.push(Reverse((next.merge_key(), l)));
        }
    }

    merged
}
