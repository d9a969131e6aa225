//! Shared Cache Module
//!
//! Thread-safe LRU cache handle. Every operation takes one exclusive lock for
//! its whole duration, so operations on one instance are serialized and the
//! reordering side effect of a lookup finishes before the next call starts.
//!
//! Emptiness checks happen under the same lock as the operation they guard.

use std::hash::Hash;

use chrono::{Duration, Utc};
use parking_lot::Mutex;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, CacheStore};
use crate::config::Config;
use crate::error::{CacheError, Result};

// == LRU Cache ==
/// Bounded, thread-safe LRU cache with optional per-entry expiration.
///
/// Share it between threads with `Arc<LruCache<K, V>>`; all methods take `&self`.
/// Values handed back to callers are clones.
///
/// # Example
/// ```
/// use chrono::Duration;
/// use lru_ttl_cache::{Config, LruCache};
///
/// let cache = LruCache::new(2, Config::default()).unwrap();
/// cache.add("a", 1, Duration::zero()).unwrap();
/// cache.add("b", 2, Duration::zero()).unwrap();
/// cache.add("c", 3, Duration::zero()).unwrap();
///
/// assert!(!cache.contains(&"a"));
/// assert_eq!(cache.keys(), vec!["c", "b"]);
/// ```
#[derive(Debug)]
pub struct LruCache<K, V> {
    store: Mutex<CacheStore<K, V>>,
    config: Config,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    // == Constructors ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// The config is stored verbatim; the cache never schedules work from it.
    ///
    /// # Errors
    /// [`CacheError::ZeroCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize, config: Config) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::ZeroCapacity);
        }
        debug!("Creating LRU cache with capacity {}", capacity);
        Ok(Self {
            store: Mutex::new(CacheStore::new(capacity)),
            config,
        })
    }

    /// Creates an empty cache from a signed capacity, as read from the environment.
    ///
    /// # Errors
    /// [`CacheError::ZeroCapacity`] for zero, [`CacheError::NegativeCapacity`]
    /// for negative values.
    pub fn with_signed_capacity(capacity: i64, config: Config) -> Result<Self> {
        if capacity < 0 {
            return Err(CacheError::NegativeCapacity(capacity));
        }
        // Saturate on targets where usize is narrower than i64
        Self::new(usize::try_from(capacity).unwrap_or(usize::MAX), config)
    }

    // == Add ==
    /// Inserts a new entry as the most recently used one.
    ///
    /// A zero `ttl` means the entry never expires, a negative one that it is
    /// already expired. When the cache is full the least recently used entry
    /// is evicted first.
    ///
    /// # Errors
    /// [`CacheError::KeyExists`] if the key is present (nothing is changed),
    /// [`CacheError::ZeroCapacity`] if the cache was resized to zero.
    pub fn add(&self, key: K, value: V, ttl: Duration) -> Result<()> {
        let now = Utc::now();
        self.store.lock().add(key, value, ttl, now)
    }

    // == Get ==
    /// Returns a clone of the value and marks the entry most recently used.
    pub fn get(&self, key: &K) -> Option<V> {
        self.store.lock().get(key)
    }

    // == Peek ==
    /// Returns a clone of the value without changing the recency order.
    pub fn peek(&self, key: &K) -> Option<V> {
        self.store.lock().peek(key)
    }

    // == Contains ==
    /// Checks whether a key is present without changing the recency order.
    pub fn contains(&self, key: &K) -> bool {
        self.store.lock().contains(key)
    }

    /// Returns a snapshot of an entry, including its expiration, without
    /// changing the recency order.
    pub fn entry(&self, key: &K) -> Option<CacheEntry<K, V>> {
        self.store.lock().entry(key)
    }

    // == Remove ==
    /// Removes the entry for `key` if present.
    ///
    /// # Errors
    /// [`CacheError::EmptyCache`] if the cache holds no entries. A missing key
    /// on a non-empty cache is not an error.
    pub fn remove(&self, key: &K) -> Result<()> {
        self.store.lock().remove(key)
    }

    // == Remove Oldest ==
    /// Removes and returns the least recently used entry, or None when empty.
    pub fn remove_oldest(&self) -> Option<(K, V)> {
        self.store.lock().remove_oldest()
    }

    // == Resize ==
    /// Sets a new capacity, evicting least recently used entries until the
    /// cache fits. Returns the number of evicted entries.
    pub fn resize(&self, capacity: usize) -> usize {
        self.store.lock().resize(capacity)
    }

    // == Replace ==
    /// Overwrites a value in place, keeping its position and expiration.
    ///
    /// # Errors
    /// [`CacheError::KeyNotFound`] if the key is absent.
    pub fn replace(&self, key: &K, value: V) -> Result<()> {
        self.store.lock().replace(key, value)
    }

    // == Update Value ==
    /// Overwrites a value, keeps its expiration and marks it most recently used.
    ///
    /// # Errors
    /// [`CacheError::KeyNotFound`] if the key is absent.
    pub fn update_value(&self, key: &K, value: V) -> Result<CacheEntry<K, V>> {
        self.store.lock().update_value(key, value)
    }

    // == Update Expiration ==
    /// Resets the expiration to `now + ttl`, keeps the value and marks the
    /// entry most recently used.
    ///
    /// # Errors
    /// [`CacheError::KeyNotFound`] if the key is absent.
    pub fn update_expiration(&self, key: &K, ttl: Duration) -> Result<CacheEntry<K, V>> {
        let now = Utc::now();
        self.store.lock().update_expiration(key, ttl, now)
    }

    // == Clear ==
    /// Removes every entry, keeping the capacity.
    pub fn clear(&self) {
        self.store.lock().clear();
    }

    // == Clear Expired ==
    /// Removes every expired entry, judged against one timestamp taken when
    /// the sweep starts. Returns the number of entries removed.
    pub fn clear_expired(&self) -> usize {
        let mut store = self.store.lock();
        let now = Utc::now();
        store.clear_expired(now)
    }

    // == Keys ==
    /// Returns all keys from most to least recently used.
    pub fn keys(&self) -> Vec<K> {
        self.store.lock().keys()
    }

    // == Accessors ==
    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    pub fn cap(&self) -> usize {
        self.store.lock().capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }

    /// Returns a consistent snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.store.lock().stats()
    }

    /// Returns the configuration given at construction.
    pub fn config(&self) -> &Config {
        &self.config
    }
}
