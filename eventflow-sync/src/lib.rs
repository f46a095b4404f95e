//! Tiered read/write synchronizer for EventFlow.
//!
//! Reconciles application state (users and event records) across three
//! tiers of durability:
//!
//! 1. **Remote primary** — a keyed-document realtime database, the
//!    source of truth when reachable
//! 2. **Remote secondary** — a REST backend exposing collection
//!    endpoints
//! 3. **Local cache** — the last-known-good snapshot on device
//!
//! # Read path
//!
//! [`Synchronizer::fetch_initial_data`] tries each tier strictly in
//! order and returns the first usable snapshot, falling back to the
//! built-in seed users when no data exists anywhere. It never fails.
//!
//! # Write path
//!
//! [`Synchronizer::persist_users`] / [`Synchronizer::persist_events`]
//! write the local cache synchronously, then attempt the primary and
//! fall back to the secondary. Remote failure is logged, never surfaced;
//! the returned [`WriteOutcome`] names the tier that durably accepted
//! the write.
//!
//! # Example
//!
//! ```no_run
//! use eventflow_storage::LocalCache;
//! use eventflow_sync::{
//!     PrimaryConfig, PrimaryStore, SecondaryStore, SyncConfig, Synchronizer,
//! };
//!
//! # async fn run() {
//! let primary = PrimaryStore::new(PrimaryConfig::from_env());
//! let sync = Synchronizer::new(
//!     Some(primary),
//!     SecondaryStore::default(),
//!     LocalCache::new("/var/lib/eventflow"),
//!     SyncConfig::default(),
//! );
//! let snapshot = sync.fetch_initial_data().await;
//! println!("{} users, {} events", snapshot.users.len(), snapshot.events.len());
//! # }
//! ```

mod error;
mod notifier;
mod primary;
mod secondary;
mod source;
mod synchronizer;

pub use error::{SyncError, SyncResult};
pub use notifier::{ChangeNotifier, Subscription};
pub use primary::{PrimaryConfig, PrimaryStore};
pub use secondary::{SecondaryConfig, SecondaryStore};
pub use synchronizer::{
    EVENTS_CACHE_KEY, SyncConfig, Synchronizer, USERS_CACHE_KEY, WriteOutcome,
};
