//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for fallible cache operations.
///
/// Lookups (`get`, `peek`, `contains`, `remove_oldest`) report absence through
/// `Option`/`bool` instead and never produce one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Capacity of zero at construction, or an insert into a cache resized to zero
    #[error("cache capacity should be more than zero")]
    ZeroCapacity,

    /// Negative capacity given to the signed constructor
    #[error("capacity cannot be negative: {0}")]
    NegativeCapacity(i64),

    /// `add` with a key that is already present
    #[error("key already exists")]
    KeyExists,

    /// `remove` on a cache holding no entries
    #[error("cache is empty")]
    EmptyCache,

    /// `replace`/`update_*` with a key that is not present
    #[error("key does not exist")]
    KeyNotFound,
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CacheError::ZeroCapacity.to_string(),
            "cache capacity should be more than zero"
        );
        assert_eq!(
            CacheError::NegativeCapacity(-3).to_string(),
            "capacity cannot be negative: -3"
        );
        assert_eq!(CacheError::EmptyCache.to_string(), "cache is empty");
    }
}
