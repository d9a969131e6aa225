//! LRU Tracker Module
//!
//! Implements Least Recently Used ordering for cache eviction.

use std::collections::VecDeque;

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Keys are stored in a VecDeque where:
/// - Front = Most recently used
/// - Back = Least recently used
///
/// Reordering is a linear scan; the tracker holds each key at most once.
#[derive(Debug, Clone)]
pub struct LruTracker<K> {
    /// Order of keys by access time
    order: VecDeque<K>,
}

impl<K> Default for LruTracker<K> {
    fn default() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }
}

impl<K: PartialEq> LruTracker<K> {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tracker with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: VecDeque::with_capacity(capacity),
        }
    }

    // == Push Front ==
    /// Inserts a key the caller knows is untracked at the most recent end.
    pub fn push_front(&mut self, key: K) {
        self.order.push_front(key);
    }

    // == Touch ==
    /// Marks a tracked key as most recently used.
    ///
    /// Returns false, leaving the order untouched, when the key is not tracked.
    pub fn touch(&mut self, key: &K) -> bool {
        match self.position(key) {
            Some(0) => true,
            Some(index) => {
                if let Some(k) = self.order.remove(index) {
                    self.order.push_front(k);
                }
                true
            }
            None => false,
        }
    }

    // == Remove ==
    /// Removes a key from the tracker, returning whether it was present.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.position(key) {
            Some(index) => self.order.remove(index).is_some(),
            None => false,
        }
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<K> {
        self.order.pop_back()
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&K> {
        self.order.back()
    }

    // == Retain ==
    /// Keeps only the keys matching `keep`, preserving their relative order.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&K) -> bool,
    {
        self.order.retain(keep);
    }

    // == Clear ==
    pub fn clear(&mut self) {
        self.order.clear();
    }

    // == Iter ==
    /// Iterates keys from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    fn position(&self, key: &K) -> Option<usize> {
        self.order.iter().position(|k| k == key)
    }
}
