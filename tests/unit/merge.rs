//! Intersection and union over plain id lists.

use siftdex::{intersect, union};

/// Distinct keys of an intersection, ascending.
fn matched_keys(a: &[u32], b: &[u32]) -> Vec<u32> {
    let result = intersect(&[a, b]);
    let mut keys: Vec<u32> = result.items.iter().map(|&&k| k).collect();
    keys.dedup();
    assert_eq!(keys.len(), result.num_matches);
    keys
}

#[test]
fn test_intersect_boundary() {
    let cases: [(&[u32], &[u32]); 7] = [
        (&[], &[]),
        (&[1], &[]),
        (&[1, 2], &[]),
        (&[1, 2], &[0]),
        (&[1, 2], &[0, 3]),
        (&[], &[0, 3]),
        (&[], &[3]),
    ];
    for (a, b) in cases {
        assert!(matched_keys(a, b).is_empty(), "{:?} ∩ {:?}", a, b);
    }
}

#[test]
fn test_intersect_duplicates() {
    assert_eq!(matched_keys(&[1, 2, 2, 2, 3], &[2]), vec![2]);
    assert_eq!(matched_keys(&[1, 2, 2, 2, 3], &[0, 2, 2]), vec![2]);

    // Every copy from every list is kept.
    let a = [1u32, 2, 2, 2, 3];
    let b = [0u32, 2, 2];
    assert_eq!(intersect(&[&a[..], &b[..]]).items.len(), 5);
}

#[test]
fn test_intersect_normal() {
    assert_eq!(matched_keys(&[1], &[1]), vec![1]);
    assert_eq!(matched_keys(&[1, 2, 10], &[1, 3, 9]), vec![1]);
    assert_eq!(matched_keys(&[0, 1, 2, 10], &[1, 3, 9]), vec![1]);
    assert_eq!(matched_keys(&[1, 2, 10, 11, 12], &[0, 1, 3, 9]), vec![1]);
    assert_eq!(matched_keys(&[1, 2, 3], &[1, 2, 3]), vec![1, 2, 3]);
    assert_eq!(matched_keys(&[0, 1, 2, 3, 4], &[1, 2, 3]), vec![1, 2, 3]);
    assert_eq!(matched_keys(&[0, 1, 2, 3, 4], &[1, 2, 3, 5]), vec![1, 2, 3]);
    assert_eq!(
        matched_keys(
            &[0, 1, 2, 3, 4, 5, 10, 11, 20, 22, 23, 30],
            &[1, 6, 9, 13, 20, 24, 25, 30, 31]
        ),
        vec![1, 20, 30]
    );
}

#[test]
fn test_union_pairwise_frequencies() {
    let v1 = [1u32];
    let v2 = [2u32];
    let v4 = [1u32, 2, 3];
    let v5 = [1u32, 2];
    let v6 = [1u32, 3];

    let cases: [(&[u32], &[u32], &[u32], &[u32]); 5] = [
        (&v1, &v4, &[1, 2, 3], &[2, 1, 1]),
        (&v1, &v5, &[1, 2], &[2, 1]),
        (&v2, &v4, &[1, 2, 3], &[1, 2, 1]),
        (&v4, &v5, &[1, 2, 3], &[2, 2, 1]),
        (&v4, &v6, &[1, 2, 3], &[2, 1, 2]),
    ];
    for (a, b, ids, freqs) in cases {
        let result = union(&[a, b]);
        assert_eq!(result.ids, ids);
        assert_eq!(result.freqs, freqs);
    }
}

#[test]
fn test_union_with_repeated_list() {
    let v4 = [1u32, 2, 3];
    let v9 = [4u32, 6];
    let v8 = [5u32];
    let result = union(&[&v4[..], &v9[..], &v8[..], &v9[..]]);
    assert_eq!(result.ids, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(result.freqs, vec![1, 1, 1, 2, 1, 2]);
}
