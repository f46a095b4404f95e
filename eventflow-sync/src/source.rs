//! Ordered snapshot sources for the read fallback chain.
//!
//! Each remote tier is a [`SnapshotSource`]: an attempt that either
//! yields a usable snapshot or declines, letting the next tier run. The
//! chain is evaluated strictly in order — a later tier starts only after
//! the earlier one has definitively declined. Within one tier the two
//! collection fetches run concurrently and are joined before the tier's
//! usability rule is applied.

use crate::error::SyncError;
use crate::primary::PrimaryStore;
use crate::secondary::SecondaryStore;
use async_trait::async_trait;
use eventflow_types::{EventRecord, Snapshot, User};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// One tier of the read fallback chain.
#[async_trait]
pub(crate) trait SnapshotSource: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Attempts to produce a usable snapshot. `None` means the tier is
    /// unavailable, timed out, or had nothing usable; the chain advances.
    async fn fetch(&self) -> Option<Snapshot>;
}

/// The primary realtime-database tier.
///
/// Usable when at least one collection comes back non-empty. An absent
/// collection is not an error; its sibling may still carry data.
pub(crate) struct PrimarySource {
    store: Arc<PrimaryStore>,
}

impl PrimarySource {
    pub(crate) fn new(store: Arc<PrimaryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SnapshotSource for PrimarySource {
    fn name(&self) -> &'static str {
        "primary"
    }

    async fn fetch(&self) -> Option<Snapshot> {
        let (users_res, events_res) = tokio::join!(
            self.store.read_collection::<User>("users"),
            self.store.read_collection::<EventRecord>("events"),
        );

        let (users, events) = match (users_res, events_res) {
            (Ok(users), Ok(events)) => {
                (users.unwrap_or_default(), events.unwrap_or_default())
            }
            (users_res, events_res) => {
                for err in [users_res.err(), events_res.err()].into_iter().flatten() {
                    warn!("primary fetch failed: {err}");
                }
                return None;
            }
        };

        if users.is_empty() && events.is_empty() {
            debug!("primary store holds no data");
            return None;
        }

        Some(Snapshot::new(users, events))
    }
}

/// The secondary REST tier.
///
/// Usable when both collection requests succeed within the shared
/// deadline and both bodies are arrays. The arrays themselves may be
/// empty — a reachable secondary that says "no records" is an answer,
/// not a failure.
pub(crate) struct SecondarySource {
    store: SecondaryStore,
    timeout: Duration,
}

impl SecondarySource {
    pub(crate) fn new(store: SecondaryStore, timeout: Duration) -> Self {
        Self { store, timeout }
    }
}

#[async_trait]
impl SnapshotSource for SecondarySource {
    fn name(&self) -> &'static str {
        "secondary"
    }

    async fn fetch(&self) -> Option<Snapshot> {
        let joined = async {
            tokio::try_join!(
                self.store.get_collection::<User>("users"),
                self.store.get_collection::<EventRecord>("events"),
            )
        };

        // Expiry drops the joined future, aborting both in-flight
        // requests.
        let result = match tokio::time::timeout(self.timeout, joined).await {
            Ok(result) => result,
            Err(_) => Err(SyncError::Timeout),
        };

        match result {
            Ok((users, events)) => Some(Snapshot::new(users, events)),
            Err(err) => {
                warn!("secondary fetch failed: {err}");
                None
            }
        }
    }
}
