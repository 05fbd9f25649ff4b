#![cfg(test)]

// Property tests for HashTable kept inside the crate so they can reach
// the slot layout through crate-private accessors.

use crate::{HashTable, TableConfig, TableError};
use hashbrown::{HashMap, HashSet};
use proptest::prelude::*;

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Set(usize, i32),
    Get(usize),
    Absent(i64),
    Mutate(usize, i32),
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<i64>, Vec<OpI>)> {
    let pool = proptest::collection::vec(
        prop_oneof![Just(0i64), Just(-1i64), -40i64..40, any::<i64>()],
        1..=12,
    );
    (1usize..=8, pool).prop_flat_map(|(capacity, pool)| {
        let idx = 0..pool.len();
        let op = prop_oneof![
            3 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Set(i, v)),
            1 => idx.clone().prop_map(OpI::Get),
            1 => any::<i64>().prop_map(OpI::Absent),
            1 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
            1 => Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (capacity, pool.clone(), ops))
    })
}

// Property: state-machine equivalence against hashbrown::HashMap.
// Invariants exercised across random operation sequences:
// - Round-trip: `set(k, v)` then `get(k)` yields `v`.
// - Update-in-place: a second `set` on a key returns the old value and
//   does not grow `len` or the overflow arena.
// - Absence: keys never set are not found.
// - Uniqueness and completeness: `iter` yields each stored key exactly once
//   and the key set equals the model's.
// - Capacity never changes; every entry beyond the first per slot is an
//   overflow node.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((capacity, pool, ops) in arb_scenario()) {
        let mut sut: HashTable<i32> = HashTable::new(capacity).unwrap();
        let mut model: HashMap<i64, i32> = HashMap::new();

        for op in ops {
            match op {
                OpI::Set(i, v) => {
                    let k = pool[i];
                    let overflow_before = sut.overflow_len();
                    let prev = sut.set(k, v).unwrap();
                    let model_prev = model.insert(k, v);
                    prop_assert_eq!(prev, model_prev);
                    if model_prev.is_some() {
                        prop_assert_eq!(sut.overflow_len(), overflow_before);
                    }
                    prop_assert_eq!(sut.get(k).map(|e| *e.value()), Some(v));
                }
                OpI::Get(i) => {
                    let k = pool[i];
                    let got = sut.get(k).map(|e| (e.key(), *e.value()));
                    prop_assert_eq!(got, model.get(&k).map(|&v| (k, v)));
                    prop_assert_eq!(sut.contains_key(k), model.contains_key(&k));
                }
                OpI::Absent(k) => {
                    prop_assert_eq!(sut.get(k).is_some(), model.contains_key(&k));
                }
                OpI::Mutate(i, d) => {
                    let k = pool[i];
                    match (sut.get_mut(k), model.get_mut(&k)) {
                        (Some(s), Some(m)) => {
                            *s = s.wrapping_add(d);
                            *m = m.wrapping_add(d);
                        }
                        (None, None) => {}
                        _ => prop_assert!(false, "get_mut presence diverged for {}", k),
                    }
                }
                OpI::Iterate => {
                    let mut seen = HashSet::new();
                    for e in sut.iter() {
                        prop_assert!(seen.insert(e.key()), "key {} yielded twice", e.key());
                        prop_assert_eq!(Some(e.value()), model.get(&e.key()));
                    }
                    prop_assert_eq!(seen.len(), model.len());
                }
            }

            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            prop_assert_eq!(sut.capacity(), capacity);
            prop_assert_eq!(sut.iter().len(), model.len());
        }

        let occupied = (0..capacity).filter(|&s| sut.chain_len(s) != Some(0)).count();
        let chained: usize = (0..capacity).map(|s| sut.chain_len(s).unwrap()).sum();
        prop_assert_eq!(chained, model.len());
        prop_assert_eq!(sut.overflow_len(), model.len() - occupied);
        let overflow = sut.overflow_len();
        prop_assert_eq!(sut.free(), overflow);
    }
}

// Property: a failed chain allocation leaves the table exactly as it was.
// Every set either succeeds with model parity or fails with
// ChainOutOfMemory while len, iteration order and overflow count stay put.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_budget_failure_is_atomic(
        capacity in 1usize..=4,
        limit in 0usize..=4,
        keys in proptest::collection::vec(-20i64..20, 1..40),
    ) {
        let mut sut: HashTable<u8> = TableConfig::new(capacity).max_overflow_nodes(limit).build().unwrap();
        let mut model: HashMap<i64, u8> = HashMap::new();

        for (n, k) in keys.into_iter().enumerate() {
            let v = n as u8;
            let before: Vec<(i64, u8)> = sut.iter().map(|e| (e.key(), *e.value())).collect();
            let overflow_before = sut.overflow_len();
            match sut.set(k, v) {
                Ok(prev) => {
                    prop_assert_eq!(prev, model.insert(k, v));
                }
                Err(TableError::ChainOutOfMemory { limit: l }) => {
                    prop_assert_eq!(l, limit);
                    prop_assert!(!model.contains_key(&k));
                    prop_assert_eq!(overflow_before, limit);
                    let after: Vec<(i64, u8)> = sut.iter().map(|e| (e.key(), *e.value())).collect();
                    prop_assert_eq!(after, before);
                }
                Err(e) => prop_assert!(false, "unexpected error: {}", e),
            }
            prop_assert!(sut.overflow_len() <= limit);
            prop_assert_eq!(sut.len(), model.len());
        }
    }
}
