//! Background Tasks Module
//!
//! Optional collaborators that drive periodic maintenance of a shared cache.
//!
//! # Tasks
//! - Expiration sweep: removes expired entries at a configured interval
//! - Scheduled clear: empties the cache at a configured interval

mod cleanup;

pub use cleanup::{spawn_clear_task, spawn_expiration_task, spawn_maintenance};
