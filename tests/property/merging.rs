//! Union, intersection and ranking against their oracles.

use crate::common::ranked_records;
use crate::oracles::{grouped_items, oracle_intersect, oracle_top_records, oracle_union, sorted_list};
use proptest::prelude::*;
use siftdex::contracts::check_ranked_output;
use siftdex::{intersect, merge, rank, union, Item};

fn as_slices(lists: &[Vec<u32>]) -> Vec<&[u32]> {
    lists.iter().map(Vec::as_slice).collect()
}

proptest! {
    #[test]
    fn prop_union_matches_oracle(lists in prop::collection::vec(sorted_list(), 0..5)) {
        let result = union(&as_slices(&lists));
        let (ids, freqs) = oracle_union(&lists);
        prop_assert_eq!(result.ids, ids);
        prop_assert_eq!(result.freqs, freqs);
    }

    #[test]
    fn prop_intersect_matches_oracle(lists in prop::collection::vec(sorted_list(), 1..4)) {
        let result = intersect(&as_slices(&lists));
        let items: Vec<u32> = result.items.iter().map(|&&k| k).collect();
        let expected = oracle_intersect(&lists);
        let mut keys = expected.clone();
        keys.dedup();
        prop_assert_eq!(items, expected);
        prop_assert_eq!(result.num_matches, keys.len());
    }

    #[test]
    fn prop_merge_is_sorted_concatenation(lists in prop::collection::vec(sorted_list(), 0..5)) {
        let merged: Vec<u32> = merge(&as_slices(&lists)).into_iter().copied().collect();
        let mut expected: Vec<u32> = lists.concat();
        expected.sort_unstable();
        prop_assert_eq!(merged, expected);
    }

    #[test]
    fn prop_rank_selects_best_records(items in grouped_items(), max in 0usize..8) {
        let refs: Vec<&Item> = items.iter().collect();
        let ranked = rank(&refs, max, 1);
        check_ranked_output(&ranked);

        let mut best = oracle_top_records(&items, max);
        best.reverse();
        prop_assert_eq!(ranked_records(&ranked), best);
    }

    #[test]
    fn prop_rank_keeps_whole_groups(items in grouped_items(), max in 1usize..8) {
        let refs: Vec<&Item> = items.iter().collect();
        let ranked = rank(&refs, max, 1);
        for record in ranked_records(&ranked) {
            let before = items.iter().filter(|i| i.record_id.0 == record).count();
            let after = ranked.iter().filter(|i| i.record_id.0 == record).count();
            prop_assert_eq!(before, after);
        }
    }
}
