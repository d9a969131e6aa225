//! Cache Module
//!
//! Provides a bounded in-memory cache with LRU eviction and TTL expiration.

mod entry;
mod lru;
mod shared;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::{expiration_for, CacheEntry};
pub use lru::LruTracker;
pub use shared::LruCache;
pub use stats::CacheStats;
pub use store::CacheStore;
