//! LRU TTL Cache - A bounded, thread-safe in-process cache
//!
//! Provides least-recently-used eviction with optional per-entry expiration.
//! Expired entries are removed by explicit sweeps; see [`tasks`] for optional
//! background collaborators that run them on a timer.

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{CacheEntry, CacheStats, LruCache};
pub use config::Config;
pub use error::{CacheError, Result};
pub use tasks::{spawn_clear_task, spawn_expiration_task, spawn_maintenance};
