//! LRU TTL Cache demo
//!
//! Walks through the cache API on a small string cache, logging each step.

use std::sync::Arc;

use anyhow::Context;
use chrono::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lru_ttl_cache::config::capacity_from_env;
use lru_ttl_cache::{spawn_maintenance, Config, LruCache};

/// Main entry point for the demo.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the cache and start any configured maintenance tasks
/// 4. Exercise add, get, keys, remove, contains, peek, remove_oldest and resize
/// 5. Print final statistics as JSON and stop the maintenance tasks
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lru_ttl_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let capacity = capacity_from_env();
    info!(
        "Configuration loaded: capacity={}, clean_interval={:?}, expiration_timeout_interval={:?}",
        capacity, config.clean_interval, config.expiration_timeout_interval
    );

    let cache: Arc<LruCache<String, String>> = Arc::new(
        LruCache::with_signed_capacity(capacity, config).context("failed to create cache")?,
    );
    let maintenance = spawn_maintenance(cache.clone());

    for (key, value) in [("foo", "bar"), ("key", "val"), ("fuzz", "buzz")] {
        if let Err(err) = cache.add(key.to_string(), value.to_string(), Duration::zero()) {
            warn!("Could not add {}: {}", key, err);
        }
    }

    match cache.get(&"foo".to_string()) {
        Some(value) => info!("key: foo, value: {}", value),
        None => info!("foo does not exist in cache"),
    }

    info!("Keys: {:?}", cache.keys());
    info!("Cache length: {}", cache.len());

    cache
        .remove(&"foo".to_string())
        .context("failed to remove foo")?;

    for key in ["key", "foo"] {
        if cache.contains(&key.to_string()) {
            info!("{} found in cache", key);
        } else {
            info!("{} does not exist in cache", key);
        }
    }

    if let Some(value) = cache.peek(&"key".to_string()) {
        info!("Peeked key without reordering, value is {}", value);
    }

    match cache.remove_oldest() {
        Some((key, value)) => info!("Oldest pair ({}, {}) removed", key, value),
        None => info!("Cache was empty, nothing removed"),
    }

    let evicted = cache.resize(10);
    info!("New cache capacity is {}, evicted {}", cache.cap(), evicted);

    println!("{}", serde_json::to_string_pretty(&cache.stats())?);

    for handle in maintenance {
        handle.abort();
    }
    Ok(())
}
