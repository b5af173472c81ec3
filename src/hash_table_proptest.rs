#![cfg(test)]

// Property tests for HashTable kept inside the crate so they can call the
// test-only `assert_consistent` check on chain bookkeeping.

use crate::hash_table::HashTable;
use crate::projection::{CharSum, HashProjection, PositionWeightedCharSum};
use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};

// Pool-indexed operations: indices shrink toward earlier keys, the pool
// shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum Op {
    Put(usize, i32),
    Get(usize),
    Remove(usize),
    Contains(String),
    Resize(usize),
    Clear,
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<Op>)> {
    // Short lowercase keys over a tiny alphabet produce plenty of anagrams.
    proptest::collection::vec("[a-e]{0,4}", 1..=10).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            4 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::Put(i, v)),
            2 => idx.clone().prop_map(Op::Get),
            2 => idx.clone().prop_map(Op::Remove),
            1 => prop_oneof![
                contains_pool.prop_map(|s: String| s),
                "[a-e]{0,4}".prop_map(|s| s)
            ]
            .prop_map(Op::Contains),
            1 => (1usize..40).prop_map(Op::Resize),
            1 => Just(Op::Clear),
            1 => Just(Op::Iterate),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Runs `ops` against the table and a std HashMap model. Checked after every
// step: size parity, load factor, empty-bucket count against a scan, and
// chain bookkeeping.
fn run_model<H>(
    mut sut: HashTable<String, i32, H>,
    pool: &[String],
    ops: Vec<Op>,
) -> Result<(), TestCaseError>
where
    H: HashProjection<String> + HashProjection<str>,
{
    let mut model: HashMap<String, i32> = HashMap::new();
    for op in ops {
        match op {
            Op::Put(i, v) => {
                let k = pool[i].clone();
                prop_assert_eq!(sut.put(k.clone(), v), model.insert(k, v));
            }
            Op::Get(i) => {
                let k = pool[i].as_str();
                prop_assert_eq!(sut.get(k), model.get(k));
            }
            Op::Remove(i) => {
                let k = pool[i].as_str();
                prop_assert_eq!(sut.remove(k), model.remove(k));
            }
            Op::Contains(s) => {
                prop_assert_eq!(sut.contains_key(s.as_str()), model.contains_key(&s));
            }
            Op::Resize(cap) => {
                let before: BTreeMap<String, i32> =
                    sut.iter().map(|(k, v)| (k.clone(), *v)).collect();
                sut.resize(cap).expect("non-zero capacity");
                prop_assert_eq!(sut.capacity(), cap);
                let after: BTreeMap<String, i32> =
                    sut.iter().map(|(k, v)| (k.clone(), *v)).collect();
                prop_assert_eq!(before, after);
            }
            Op::Clear => {
                let cap = sut.capacity();
                sut.clear();
                model.clear();
                prop_assert_eq!(sut.capacity(), cap);
            }
            Op::Iterate => {
                let seen: BTreeMap<String, i32> =
                    sut.iter().map(|(k, v)| (k.clone(), *v)).collect();
                prop_assert_eq!(seen.len(), sut.len(), "iteration yields each key once");
                let expected: BTreeMap<String, i32> = model.clone().into_iter().collect();
                prop_assert_eq!(seen, expected);
            }
        }

        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        prop_assert_eq!(sut.load_factor(), sut.len() as f64 / sut.capacity() as f64);
        let scanned = (0..sut.capacity())
            .filter(|&b| sut.chain_len(b) == Some(0))
            .count();
        prop_assert_eq!(sut.empty_buckets(), scanned);
        sut.assert_consistent();
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn prop_state_machine_char_sum((pool, ops) in arb_scenario(), cap in 1usize..16) {
        run_model(HashTable::new(cap, CharSum).unwrap(), &pool, ops)?;
    }

    #[test]
    fn prop_state_machine_position_weighted((pool, ops) in arb_scenario(), cap in 1usize..16) {
        run_model(HashTable::new(cap, PositionWeightedCharSum).unwrap(), &pool, ops)?;
    }
}

// Worst case: every key projects to the same bucket, so all lookups are
// resolved by `Eq` along one chain.
#[derive(Clone, Copy, Default)]
struct Constant;

impl<Q: ?Sized> HashProjection<Q> for Constant {
    fn project(&self, _key: &Q) -> u64 {
        0
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario(), cap in 1usize..8) {
        run_model(HashTable::new(cap, Constant).unwrap(), &pool, ops)?;
    }
}
