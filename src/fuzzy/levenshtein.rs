// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Levenshtein distance over characters.
//!
//! Only two rows of the DP table are kept, laid over the shorter word, so
//! memory is O(min(|a|, |b|)). The bounded form is what fuzzy matching uses to
//! verify candidates.

/// Exact edit distance (insertions, deletions, substitutions, unit cost).
///
/// Symmetric. Zero iff `a == b`. Never more than the longer length.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let (short, long) = shorter_first(a, b);
    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0usize; short.len() + 1];
    for (i, &lc) in long.iter().enumerate() {
        fill_row(&prev, &mut curr, i + 1, lc, &short);
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[short.len()]
}

/// The edit distance if it is at most `max`, `None` otherwise.
///
/// Gives up as soon as the length gap or a full row exceeds `max`; row minima
/// never decrease, so no later cell can come back under the bound.
pub fn bounded_edit_distance(a: &str, b: &str, max: usize) -> Option<usize> {
    let (short, long) = shorter_first(a, b);
    if long.len() - short.len() > max {
        return None;
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0usize; short.len() + 1];
    for (i, &lc) in long.iter().enumerate() {
        let row_min = fill_row(&prev, &mut curr, i + 1, lc, &short);
        if row_min > max {
            return None;
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    Some(prev[short.len()]).filter(|&d| d <= max)
}

/// Whether `edit_distance(a, b) <= max`.
pub fn within_edit_distance(a: &str, b: &str, max: usize) -> bool {
    bounded_edit_distance(a, b, max).is_some()
}

fn shorter_first(a: &str, b: &str) -> (Vec<char>, Vec<char>) {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.len() <= b.len() {
        (a, b)
    } else {
        (b, a)
    }
}

/// Compute row `row` of the table from `prev`, returning its minimum.
fn fill_row(prev: &[usize], curr: &mut [usize], row: usize, lc: char, short: &[char]) -> usize {
    curr[0] = row;
    let mut row_min = row;
    for (j, &sc) in short.iter().enumerate() {
        let substitute = prev[j] + usize::from(lc != sc);
        curr[j + 1] = (prev[j + 1].min(curr[j]) + 1).min(substitute);
        row_min = row_min.min(curr[j + 1]);
    }
    row_min
}
