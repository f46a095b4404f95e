//! Local on-device cache for EventFlow.
//!
//! Stores the last-known-good copy of each record collection as a JSON
//! array in a file under the cache directory. The cache is the floor of
//! the read fallback chain: reads never fail (missing or corrupt data
//! degrades to an empty collection) and writes are best-effort.
//!
//! All I/O is synchronous; a cache call never suspends the caller.

mod cache;
mod error;

pub use cache::LocalCache;
pub use error::{StorageError, StorageResult};
