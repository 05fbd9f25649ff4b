// Most-frequent-element tests.
//
// Invariants exercised:
// - The result has the maximum occurrence count of the input.
// - Ties go to the first maximum in table visitation order: ascending home
//   slot, home entry before chain, chain in insertion order.
// - Empty input has no answer.
use chained_hashtable::{most_frequent, most_frequent_with_capacity, DEFAULT_CAPACITY};
use hashbrown::HashMap;
use proptest::prelude::*;
use test_log::test;

#[test]
fn counts_pick_the_majority() {
    // counts {1:2, 2:1, 3:3}
    assert_eq!(most_frequent(&[1, 3, 2, 3, 1, 3]).unwrap(), Some(3));
}

// Test: tie between 5 and 7 under the default capacity.
// Verifies: slot 5 is visited before slot 7, so 5 wins.
#[test]
fn tie_goes_to_lower_home_slot() {
    assert_eq!(DEFAULT_CAPACITY, 257);
    assert_eq!(most_frequent(&[5, 5, 7, 7]).unwrap(), Some(5));
    // Insertion order does not matter when the slots differ.
    assert_eq!(most_frequent(&[7, 7, 5, 5]).unwrap(), Some(5));
}

// Test: tie where visitation order differs from numeric order.
// With capacity 3, 7 lives in slot 1 and 5 in slot 2.
#[test]
fn tie_follows_slot_order_not_key_order() {
    assert_eq!(most_frequent_with_capacity(&[5, 5, 7, 7], 3).unwrap(), Some(7));
}

// Test: tie inside one chain.
// With capacity 2, both 5 and 7 hash to slot 1; the first inserted is home.
#[test]
fn tie_within_chain_goes_to_first_inserted() {
    assert_eq!(most_frequent_with_capacity(&[5, 5, 7, 7], 2).unwrap(), Some(5));
    assert_eq!(most_frequent_with_capacity(&[7, 5, 5, 7], 2).unwrap(), Some(7));
}

#[test]
fn empty_input() {
    assert_eq!(most_frequent(&[]).unwrap(), None);
    assert_eq!(most_frequent_with_capacity(&[], 1).unwrap(), None);
}

#[test]
fn zero_and_negative_values_are_counted() {
    assert_eq!(most_frequent(&[0, -3, 0, -3, -3]).unwrap(), Some(-3));
    assert_eq!(most_frequent(&[0, 0, 1]).unwrap(), Some(0));
}

#[test]
fn zero_capacity_is_rejected() {
    assert!(most_frequent_with_capacity(&[1, 2], 0).is_err());
}

// Property: the answer's count equals the true maximum count, and among
// the keys tied at that count it is the first one the table visits.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_result_has_max_count(
        capacity in 1usize..=16,
        nums in proptest::collection::vec(-10i64..10, 0..60),
    ) {
        let got = most_frequent_with_capacity(&nums, capacity).unwrap();

        let mut counts: HashMap<i64, usize> = HashMap::new();
        let mut first_seen: Vec<i64> = Vec::new();
        for &n in &nums {
            let c = counts.entry(n).or_insert(0);
            if *c == 0 {
                first_seen.push(n);
            }
            *c += 1;
        }

        match got {
            None => prop_assert!(nums.is_empty()),
            Some(k) => {
                let max = *counts.values().max().unwrap();
                prop_assert_eq!(counts[&k], max);
                // Expected visitation order: by home slot, then first insertion.
                let slot = |n: i64| (n as u64 % capacity as u64) as usize;
                let mut order: Vec<(usize, usize, i64)> = first_seen
                    .iter()
                    .enumerate()
                    .map(|(i, &n)| (slot(n), i, n))
                    .collect();
                order.sort();
                let expected = order
                    .into_iter()
                    .map(|(_, _, n)| n)
                    .find(|n| counts[n] == max);
                prop_assert_eq!(Some(k), expected);
            }
        }
    }
}
