// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance.
//!
//! Checks the metric laws on arbitrary Unicode input and that the bounded
//! variant agrees with the full computation.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use siftdex::{edit_distance, within_edit_distance};

#[derive(Debug, Arbitrary)]
struct DistanceInput {
    a: String,
    b: String,
    c: String,
    max: u8,
}

fn capped(s: &str) -> String {
    s.chars().take(40).collect()
}

fuzz_target!(|input: DistanceInput| {
    let a = capped(&input.a);
    let b = capped(&input.b);
    let c = capped(&input.c);

    let ab = edit_distance(&a, &b);
    assert_eq!(ab, edit_distance(&b, &a), "not symmetric");
    assert_eq!(edit_distance(&a, &a), 0);

    let (la, lb) = (a.chars().count(), b.chars().count());
    assert!(ab >= la.abs_diff(lb));
    assert!(ab <= la.max(lb));

    let ac = edit_distance(&a, &c);
    let bc = edit_distance(&b, &c);
    assert!(ac <= ab + bc, "triangle inequality violated");

    let max = usize::from(input.max % 8);
    assert_eq!(within_edit_distance(&a, &b, max), ab <= max);
});
