//! The synchronizer: ordered-fallback reads and tiered best-effort
//! writes.

use crate::notifier::ChangeNotifier;
use crate::primary::PrimaryStore;
use crate::secondary::SecondaryStore;
use crate::source::{PrimarySource, SecondarySource, SnapshotSource};
use eventflow_storage::LocalCache;
use eventflow_types::{EventRecord, Keyed, Snapshot, User, UserRole};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Cache key for the user collection.
pub const USERS_CACHE_KEY: &str = "eventflow_users";
/// Cache key for the event collection.
pub const EVENTS_CACHE_KEY: &str = "eventflow_events";

/// Configuration for the synchronizer.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Hard deadline for the secondary read pair, in milliseconds.
    pub secondary_timeout_ms: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            secondary_timeout_ms: 3_000,
        }
    }
}

/// Which tier durably accepted a write.
///
/// Write entry points never fail; this is the side channel that tells a
/// caller whether the data reached a remote tier or only survived
/// locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The primary store accepted the overwrite.
    Primary,
    /// The primary was unconfigured or refused; the secondary accepted.
    Secondary,
    /// No remote tier accepted the write. For full-collection persists
    /// the local cache still holds the data.
    Unsynced,
}

impl WriteOutcome {
    /// Whether the write reached a remote tier.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        !matches!(self, Self::Unsynced)
    }
}

/// Orchestrates reads and writes across the three tiers.
///
/// The synchronizer is the sole mutator of the local cache; the
/// application holds only the snapshots it returns. Overlapping write
/// calls are not ordered against each other — the last write to reach
/// the cache wins.
pub struct Synchronizer {
    primary: Option<Arc<PrimaryStore>>,
    secondary: SecondaryStore,
    cache: LocalCache,
    sources: Vec<Box<dyn SnapshotSource>>,
    notifier: ChangeNotifier,
}

impl Synchronizer {
    /// Creates a synchronizer over the given tiers.
    ///
    /// `None` for the primary marks it explicitly unconfigured: reads
    /// then start at the secondary and writes skip straight from the
    /// cache to the secondary.
    #[must_use]
    pub fn new(
        primary: Option<PrimaryStore>,
        secondary: SecondaryStore,
        cache: LocalCache,
        config: SyncConfig,
    ) -> Self {
        let primary = primary.map(Arc::new);

        let mut sources: Vec<Box<dyn SnapshotSource>> = Vec::new();
        if let Some(primary) = &primary {
            sources.push(Box::new(PrimarySource::new(Arc::clone(primary))));
        }
        sources.push(Box::new(SecondarySource::new(
            secondary.clone(),
            Duration::from_millis(config.secondary_timeout_ms),
        )));

        Self {
            primary,
            secondary,
            cache,
            sources,
            notifier: ChangeNotifier::new(),
        }
    }

    /// The change notifier associated with this synchronizer.
    pub fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    // ── Read path ───────────────────────────────────────────────

    /// Loads the initial snapshot, trying each tier strictly in order.
    ///
    /// The first tier that yields a usable snapshot wins, and its
    /// collections replace the cached copies wholesale. When every
    /// remote tier declines, the cached collections are returned,
    /// substituting the built-in seed users if no user has ever been
    /// stored. Never fails — the caller always gets a snapshot, though
    /// it cannot tell fresh remote data from a stale cached fallback.
    pub async fn fetch_initial_data(&self) -> Snapshot {
        for source in &self.sources {
            if let Some(snapshot) = source.fetch().await {
                info!(
                    "loaded {} users / {} events from {} store",
                    snapshot.users.len(),
                    snapshot.events.len(),
                    source.name()
                );
                self.cache.write_collection(USERS_CACHE_KEY, &snapshot.users);
                self.cache.write_collection(EVENTS_CACHE_KEY, &snapshot.events);
                return snapshot;
            }
            debug!("{} store declined, trying next tier", source.name());
        }

        let mut users: Vec<User> = self.cache.read_collection(USERS_CACHE_KEY);
        let events: Vec<EventRecord> = self.cache.read_collection(EVENTS_CACHE_KEY);

        if users.is_empty() {
            users = bootstrap_users();
            // Persist the substitution so the next cold read sees it
            // without re-bootstrapping. Events stay as cached, even if
            // empty — there are no seed events.
            self.cache.write_collection(USERS_CACHE_KEY, &users);
            info!("no cached users, seeded {} bootstrap accounts", users.len());
        } else {
            info!(
                "using cached data: {} users / {} events",
                users.len(),
                events.len()
            );
        }

        Snapshot::new(users, events)
    }

    // ── Write path ──────────────────────────────────────────────

    /// Persists the full user collection across the tiers.
    ///
    /// The cache is written synchronously before any remote attempt, so
    /// the collection survives even with every remote tier down. Remote
    /// failures are logged, never returned.
    pub async fn persist_users(&self, users: &[User]) -> WriteOutcome {
        self.persist_collection(USERS_CACHE_KEY, "users", users).await
    }

    /// Persists the full event collection across the tiers.
    ///
    /// Same contract as [`Synchronizer::persist_users`].
    pub async fn persist_events(&self, events: &[EventRecord]) -> WriteOutcome {
        self.persist_collection(EVENTS_CACHE_KEY, "events", events).await
    }

    async fn persist_collection<T>(
        &self,
        cache_key: &str,
        collection: &str,
        records: &[T],
    ) -> WriteOutcome
    where
        T: Serialize + Keyed + Sync,
    {
        self.cache.write_collection(cache_key, records);

        if let Some(primary) = &self.primary {
            match primary.write_collection(collection, records).await {
                Ok(()) => {
                    debug!("{collection} persisted to primary store");
                    return WriteOutcome::Primary;
                }
                Err(err) => {
                    warn!("primary write for {collection} failed, trying secondary: {err}");
                }
            }
        }

        match self.secondary.put_collection(collection, records).await {
            Ok(()) => {
                debug!("{collection} persisted to secondary store");
                WriteOutcome::Secondary
            }
            Err(err) => {
                warn!("secondary write for {collection} failed, data kept locally: {err}");
                WriteOutcome::Unsynced
            }
        }
    }

    // ── Partial updates ─────────────────────────────────────────

    /// Applies a partial-field update to a single user.
    ///
    /// Narrower contract than the full persists: the patch goes to the
    /// secondary store only, bypassing both the cache and the primary.
    /// Never fails; an unreachable secondary yields
    /// [`WriteOutcome::Unsynced`].
    pub async fn update_user(&self, id: &str, patch: &Value) -> WriteOutcome {
        self.update_record("users", id, patch).await
    }

    /// Applies a partial-field update to a single event.
    ///
    /// Same contract as [`Synchronizer::update_user`].
    pub async fn update_event(&self, id: &str, patch: &Value) -> WriteOutcome {
        self.update_record("events", id, patch).await
    }

    async fn update_record(&self, collection: &str, id: &str, patch: &Value) -> WriteOutcome {
        match self.secondary.put_record(collection, id, patch).await {
            Ok(()) => WriteOutcome::Secondary,
            Err(err) => {
                warn!("record update for {collection}/{id} failed: {err}");
                WriteOutcome::Unsynced
            }
        }
    }
}

/// The fixed seed users returned when no user data exists anywhere.
fn bootstrap_users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            name: "Administrator".to_string(),
            email: "admin@demo.com".to_string(),
            password: "123".to_string(),
            role: UserRole::Admin,
            active: true,
        },
        User {
            id: "2".to_string(),
            name: "Common User".to_string(),
            email: "user@demo.com".to_string(),
            password: "123".to_string(),
            role: UserRole::Common,
            active: true,
        },
        User {
            id: "3".to_string(),
            name: "Viewer".to_string(),
            email: "viewer@demo.com".to_string(),
            password: "123".to_string(),
            role: UserRole::Viewer,
            active: true,
        },
    ]
}
