//! Configuration Module
//!
//! Handles loading cache tuning values from environment variables.
//!
//! The cache stores these values verbatim and never acts on them; the
//! background tasks in [`crate::tasks`] are what read them.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default capacity used by the binary when `CACHE_CAPACITY` is unset.
pub const DEFAULT_CAPACITY: i64 = 1000;

/// Optional tuning values handed to the cache at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Interval after which a collaborator empties the whole cache
    pub clean_interval: Option<Duration>,
    /// Interval between expiration sweeps run by a collaborator
    pub expiration_timeout_interval: Option<Duration>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CLEAN_INTERVAL` - Full clear frequency in seconds (default: disabled)
    /// - `EXPIRATION_TIMEOUT_INTERVAL` - Expiration sweep frequency in seconds (default: disabled)
    ///
    /// A value of `0` or one that fails to parse leaves the interval disabled.
    pub fn from_env() -> Self {
        Self {
            clean_interval: interval_from_env("CLEAN_INTERVAL"),
            expiration_timeout_interval: interval_from_env("EXPIRATION_TIMEOUT_INTERVAL"),
        }
    }

    // == Builders ==
    /// Sets the full clear interval.
    pub fn with_clean_interval(mut self, interval: Duration) -> Self {
        self.clean_interval = Some(interval);
        self
    }

    /// Sets the expiration sweep interval.
    pub fn with_expiration_timeout_interval(mut self, interval: Duration) -> Self {
        self.expiration_timeout_interval = Some(interval);
        self
    }
}

/// Reads the cache capacity from `CACHE_CAPACITY` (default: 1000).
///
/// Kept signed so that a negative value reaches the constructor and is
/// reported as [`crate::CacheError::NegativeCapacity`].
pub fn capacity_from_env() -> i64 {
    env::var("CACHE_CAPACITY")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_CAPACITY)
}

fn interval_from_env(name: &str) -> Option<Duration> {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}
