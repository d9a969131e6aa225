//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

// == Cache Entry ==
/// Represents a single cache entry with key, value and metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheEntry<K, V> {
    /// The key the entry is stored under
    pub key: K,
    /// The stored value
    pub value: V,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Absolute expiration timestamp, None = no expiration
    pub expires_at: Option<DateTime<Utc>>,
}

impl<K, V> CacheEntry<K, V> {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl` after `now`.
    ///
    /// # Arguments
    /// * `key` - The key to store under
    /// * `value` - The value to store
    /// * `ttl` - Time to live; zero means never, negative means already expired
    /// * `now` - Reference timestamp for the expiration
    pub fn new(key: K, value: V, ttl: Duration, now: DateTime<Utc>) -> Self {
        Self {
            key,
            value,
            created_at: now,
            expires_at: expiration_for(ttl, now),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired as of `now`.
    ///
    /// An entry is expired once `now` reaches its expiration timestamp, so a
    /// negative TTL yields an entry that is expired from the moment it is made.
    /// Entries without an expiration are never expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires) => now >= expires,
            None => false,
        }
    }

    /// Checks if the entry has expired against the current clock.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    // == Time To Live ==
    /// Returns the remaining TTL, or None if no expiration is set.
    ///
    /// # Returns
    /// - `Some(Duration::zero())` if the entry has expired
    /// - `Some(remaining)` if the entry has TTL and hasn't expired
    /// - `None` if the entry never expires
    pub fn ttl_remaining(&self) -> Option<Duration> {
        self.expires_at.map(|expires| {
            let remaining = expires.signed_duration_since(Utc::now());
            remaining.max(Duration::zero())
        })
    }
}

// == Utility Functions ==
/// Computes the absolute expiration for a TTL taken at `now`.
///
/// Out-of-range results saturate to the earliest or latest representable
/// timestamp instead of panicking.
pub fn expiration_for(ttl: Duration, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if ttl.is_zero() {
        return None;
    }
    let expires = now.checked_add_signed(ttl).unwrap_or(if ttl < Duration::zero() {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    });
    Some(expires)
}
