//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the engine against a simple reference model.

use std::collections::{HashSet, VecDeque};

use chrono::{Duration, Utc};
use proptest::prelude::*;

use crate::cache::CacheStore;
use crate::error::CacheError;

// == Test Configuration ==
const TEST_MAX_CAPACITY: usize = 8;

// == Strategies ==
/// Small key space so that operations collide often
fn key_strategy() -> impl Strategy<Value = u8> {
    0u8..16
}

#[derive(Debug, Clone)]
enum CacheOp {
    Add { key: u8, value: u32 },
    Get { key: u8 },
    Peek { key: u8 },
    Remove { key: u8 },
    RemoveOldest,
    Resize { capacity: usize },
    Replace { key: u8, value: u32 },
    UpdateValue { key: u8, value: u32 },
    Clear,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (key_strategy(), any::<u32>()).prop_map(|(key, value)| CacheOp::Add { key, value }),
        3 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        1 => key_strategy().prop_map(|key| CacheOp::Peek { key }),
        1 => key_strategy().prop_map(|key| CacheOp::Remove { key }),
        1 => Just(CacheOp::RemoveOldest),
        1 => (1..=TEST_MAX_CAPACITY).prop_map(|capacity| CacheOp::Resize { capacity }),
        1 => (key_strategy(), any::<u32>()).prop_map(|(key, value)| CacheOp::Replace { key, value }),
        1 => (key_strategy(), any::<u32>()).prop_map(|(key, value)| CacheOp::UpdateValue { key, value }),
        1 => Just(CacheOp::Clear),
    ]
}

// == Reference Model ==
/// Front = most recently used, kept as plain (key, value) pairs.
struct Model {
    order: VecDeque<(u8, u32)>,
    capacity: usize,
}

impl Model {
    fn position(&self, key: u8) -> Option<usize> {
        self.order.iter().position(|(k, _)| *k == key)
    }

    fn promote(&mut self, index: usize) {
        if let Some(pair) = self.order.remove(index) {
            self.order.push_front(pair);
        }
    }

    fn keys(&self) -> Vec<u8> {
        self.order.iter().map(|(k, _)| *k).collect()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // For any operation sequence, the engine matches the model in contents,
    // recency order and reported outcomes, and never exceeds its capacity.
    #[test]
    fn prop_matches_reference_model(
        capacity in 1..=TEST_MAX_CAPACITY,
        ops in prop::collection::vec(cache_op_strategy(), 1..80)
    ) {
        let mut store: CacheStore<u8, u32> = CacheStore::new(capacity);
        let mut model = Model { order: VecDeque::new(), capacity };
        let now = Utc::now();

        for op in ops {
            match op {
                CacheOp::Add { key, value } => {
                    let result = store.add(key, value, Duration::zero(), now);
                    if model.position(key).is_some() {
                        prop_assert_eq!(result, Err(CacheError::KeyExists));
                    } else {
                        prop_assert_eq!(result, Ok(()));
                        if model.order.len() == model.capacity {
                            model.order.pop_back();
                        }
                        model.order.push_front((key, value));
                    }
                }
                CacheOp::Get { key } => {
                    let expected = model.position(key).map(|i| {
                        let value = model.order[i].1;
                        model.promote(i);
                        value
                    });
                    prop_assert_eq!(store.get(&key), expected);
                }
                CacheOp::Peek { key } => {
                    let expected = model.position(key).map(|i| model.order[i].1);
                    prop_assert_eq!(store.peek(&key), expected);
                }
                CacheOp::Remove { key } => {
                    let result = store.remove(&key);
                    if model.order.is_empty() {
                        prop_assert_eq!(result, Err(CacheError::EmptyCache));
                    } else {
                        prop_assert_eq!(result, Ok(()));
                        if let Some(i) = model.position(key) {
                            model.order.remove(i);
                        }
                    }
                }
                CacheOp::RemoveOldest => {
                    prop_assert_eq!(store.remove_oldest(), model.order.pop_back());
                }
                CacheOp::Resize { capacity } => {
                    let expected = model.order.len().saturating_sub(capacity);
                    model.order.truncate(capacity);
                    model.capacity = capacity;
                    prop_assert_eq!(store.resize(capacity), expected);
                }
                CacheOp::Replace { key, value } => {
                    let result = store.replace(&key, value);
                    match model.position(key) {
                        Some(i) => {
                            prop_assert_eq!(result, Ok(()));
                            model.order[i].1 = value;
                        }
                        None => {
                            prop_assert_eq!(result, Err(CacheError::KeyNotFound));
                        }
                    }
                }
                CacheOp::UpdateValue { key, value } => {
                    let result = store.update_value(&key, value);
                    match model.position(key) {
                        Some(i) => {
                            prop_assert_eq!(result.map(|e| e.value), Ok(value));
                            model.order[i].1 = value;
                            model.promote(i);
                        }
                        None => {
                            prop_assert_eq!(result.map(|e| e.value), Err(CacheError::KeyNotFound));
                        }
                    }
                }
                CacheOp::Clear => {
                    store.clear();
                    model.order.clear();
                }
            }

            prop_assert!(store.len() <= store.capacity());
            prop_assert_eq!(store.capacity(), model.capacity);
            prop_assert_eq!(store.keys(), model.keys());
        }

        let unique: HashSet<u8> = store.keys().into_iter().collect();
        prop_assert_eq!(unique.len(), store.len(), "Duplicate keys in recency order");
    }

    // Sweeping removes exactly the expired subset and keeps survivors in order.
    #[test]
    fn prop_clear_expired_removes_expired_subset(
        ttls in prop::collection::vec(-5i64..5, 1..20)
    ) {
        let mut store: CacheStore<usize, i64> = CacheStore::new(ttls.len());
        let now = Utc::now();
        for (key, ttl) in ttls.iter().enumerate() {
            store.add(key, *ttl, Duration::seconds(*ttl), now).unwrap();
        }

        // Zero TTL never expires; anything at or before `now` has expired
        let expected: Vec<usize> = store
            .keys()
            .into_iter()
            .filter(|key| ttls[*key] >= 0)
            .collect();

        let removed = store.clear_expired(now);

        prop_assert_eq!(removed, ttls.len() - expected.len());
        prop_assert_eq!(store.keys(), expected);
    }

    // Shrinking keeps exactly the most recently used entries.
    #[test]
    fn prop_resize_keeps_most_recent(
        fill in 1usize..20,
        new_capacity in 1usize..20
    ) {
        let mut store: CacheStore<usize, usize> = CacheStore::new(fill);
        let now = Utc::now();
        for key in 0..fill {
            store.add(key, key, Duration::zero(), now).unwrap();
        }
        let before = store.keys();

        let evicted = store.resize(new_capacity);

        prop_assert_eq!(evicted, fill.saturating_sub(new_capacity));
        prop_assert_eq!(store.keys(), before[..fill.min(new_capacity)].to_vec());
        prop_assert_eq!(store.capacity(), new_capacity);
    }
}
