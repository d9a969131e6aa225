//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with LRU tracking and TTL expiration.
//!
//! `CacheStore` is not synchronized; [`super::LruCache`] wraps it in a mutex.
//! Methods that depend on the clock take `now` so one operation sees a single
//! timestamp.

use std::collections::HashMap;
use std::hash::Hash;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, trace};

use crate::cache::entry::expiration_for;
use crate::cache::{CacheEntry, CacheStats, LruTracker};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Main cache storage with LRU eviction and TTL support.
#[derive(Debug)]
pub struct CacheStore<K, V> {
    /// Key-value storage
    entries: HashMap<K, CacheEntry<K, V>>,
    /// LRU access tracker
    lru: LruTracker<K>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl<K, V> CacheStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates a new empty CacheStore. Capacity is validated by the caller.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            lru: LruTracker::with_capacity(capacity),
            stats: CacheStats::new(),
            capacity,
        }
    }

    // == Add ==
    /// Inserts a new entry at the most recently used end.
    ///
    /// If the cache is at capacity, the least recently used entry is evicted
    /// first. Existing keys are never overwritten.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl` - Time to live, zero for no expiration
    /// * `now` - Timestamp the expiration is computed from
    pub fn add(&mut self, key: K, value: V, ttl: Duration, now: DateTime<Utc>) -> Result<()> {
        if self.entries.contains_key(&key) {
            return Err(CacheError::KeyExists);
        }
        if self.capacity == 0 {
            return Err(CacheError::ZeroCapacity);
        }

        if self.entries.len() >= self.capacity && self.remove_oldest().is_some() {
            self.stats.record_evictions(1);
            trace!("Evicted least recently used entry to make room");
        }

        let entry = CacheEntry::new(key.clone(), value, ttl, now);
        self.entries.insert(key.clone(), entry);
        self.lru.push_front(key);

        Ok(())
    }

    // == Get ==
    /// Retrieves a value by key and promotes it to most recently used.
    pub fn get(&mut self, key: &K) -> Option<V> {
        if self.entries.is_empty() {
            self.stats.record_miss();
            return None;
        }

        match self.entries.get(key) {
            Some(entry) => {
                let value = entry.value.clone();
                self.lru.touch(key);
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Peek ==
    /// Retrieves a value by key without touching the recency order.
    pub fn peek(&self, key: &K) -> Option<V> {
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Contains ==
    /// Checks whether a key is present without touching the recency order.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    // == Entry ==
    /// Returns a snapshot of the full entry without touching the recency order.
    pub fn entry(&self, key: &K) -> Option<CacheEntry<K, V>> {
        self.entries.get(key).cloned()
    }

    // == Remove ==
    /// Removes an entry by key.
    ///
    /// Fails only when the cache is empty; removing a missing key from a
    /// non-empty cache does nothing.
    pub fn remove(&mut self, key: &K) -> Result<()> {
        if self.entries.is_empty() {
            return Err(CacheError::EmptyCache);
        }
        if self.entries.remove(key).is_some() {
            self.lru.remove(key);
        }
        Ok(())
    }

    // == Remove Oldest ==
    /// Removes the least recently used entry and returns its key and value.
    pub fn remove_oldest(&mut self) -> Option<(K, V)> {
        let key = self.lru.evict_oldest()?;
        self.entries
            .remove(&key)
            .map(|entry| (entry.key, entry.value))
    }

    // == Resize ==
    /// Changes the capacity, evicting the oldest entries that no longer fit.
    ///
    /// Returns the number of evicted entries.
    pub fn resize(&mut self, capacity: usize) -> usize {
        let mut evicted = 0;
        while self.entries.len() > capacity && self.remove_oldest().is_some() {
            evicted += 1;
        }
        self.stats.record_evictions(evicted);

        debug!(
            "Resized cache from {} to {} entries, evicted {}",
            self.capacity, capacity, evicted
        );
        self.capacity = capacity;
        evicted
    }

    // == Replace ==
    /// Overwrites the value of an existing key in place.
    ///
    /// Neither the recency order nor the expiration changes.
    pub fn replace(&mut self, key: &K, value: V) -> Result<()> {
        let entry = self.entries.get_mut(key).ok_or(CacheError::KeyNotFound)?;
        entry.value = value;
        Ok(())
    }

    // == Update Value ==
    /// Sets a new value, keeps the expiration and moves the entry to the
    /// most recently used end. Returns the updated entry.
    pub fn update_value(&mut self, key: &K, value: V) -> Result<CacheEntry<K, V>> {
        let entry = self.entries.get_mut(key).ok_or(CacheError::KeyNotFound)?;
        entry.value = value;
        let updated = entry.clone();
        self.lru.touch(key);
        Ok(updated)
    }

    // == Update Expiration ==
    /// Recomputes the expiration as `now + ttl`, keeps the value and moves the
    /// entry to the most recently used end. Returns the updated entry.
    pub fn update_expiration(
        &mut self,
        key: &K,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<CacheEntry<K, V>> {
        let entry = self.entries.get_mut(key).ok_or(CacheError::KeyNotFound)?;
        entry.expires_at = expiration_for(ttl, now);
        let updated = entry.clone();
        self.lru.touch(key);
        Ok(updated)
    }

    // == Clear ==
    /// Removes all entries. The capacity is unchanged.
    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        self.lru.clear();
        if removed > 0 {
            debug!("Cleared {} entries", removed);
        }
    }

    // == Clear Expired ==
    /// Removes every entry expired as of `now`.
    ///
    /// Survivors keep their relative order. Returns the number of entries removed.
    pub fn clear_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));
        let removed = before - self.entries.len();

        if removed > 0 {
            let entries = &self.entries;
            self.lru.retain(|key| entries.contains_key(key));
            self.stats.record_expirations(removed);
            debug!("Removed {} expired entries", removed);
        }
        removed
    }

    // == Keys ==
    /// Returns all keys from most to least recently used.
    pub fn keys(&self) -> Vec<K> {
        self.lru.iter().cloned().collect()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.total_entries = self.entries.len();
        stats.capacity = self.capacity;
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Capacity ==
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
