//! Cache Maintenance Tasks
//!
//! Background tasks that periodically sweep expired entries or empty the
//! cache. The cache itself never schedules work; these tasks drive it from
//! the outside through its public API.

use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::LruCache;

/// Spawns a task that calls `clear_expired` every `interval`.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(LruCache::new(1000, Config::default())?);
/// let sweeper = spawn_expiration_task(cache.clone(), Duration::from_secs(1));
/// // Later, during shutdown:
/// sweeper.abort();
/// ```
pub fn spawn_expiration_task<K, V>(cache: Arc<LruCache<K, V>>, interval: Duration) -> JoinHandle<()>
where
    K: Eq + Hash + Clone + Send + 'static,
    V: Clone + Send + 'static,
{
    tokio::spawn(async move {
        info!("Starting expiration sweep task with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.clear_expired();

            if removed > 0 {
                info!("Expiration sweep: removed {} expired entries", removed);
            } else {
                debug!("Expiration sweep: no expired entries found");
            }
        }
    })
}

/// Spawns a task that empties the whole cache every `interval`.
pub fn spawn_clear_task<K, V>(cache: Arc<LruCache<K, V>>, interval: Duration) -> JoinHandle<()>
where
    K: Eq + Hash + Clone + Send + 'static,
    V: Clone + Send + 'static,
{
    tokio::spawn(async move {
        info!("Starting clear task with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.len();
            cache.clear();
            debug!("Scheduled clear: dropped {} entries", removed);
        }
    })
}

/// Spawns the tasks requested by the cache's own configuration.
///
/// `expiration_timeout_interval` drives the expiration sweep and
/// `clean_interval` the full clear; unset intervals spawn nothing.
pub fn spawn_maintenance<K, V>(cache: Arc<LruCache<K, V>>) -> Vec<JoinHandle<()>>
where
    K: Eq + Hash + Clone + Send + 'static,
    V: Clone + Send + 'static,
{
    let config = cache.config().clone();
    let mut handles = Vec::new();

    if let Some(interval) = config.expiration_timeout_interval {
        handles.push(spawn_expiration_task(cache.clone(), interval));
    }
    if let Some(interval) = config.clean_interval {
        handles.push(spawn_clear_task(cache, interval));
    }
    handles
}
