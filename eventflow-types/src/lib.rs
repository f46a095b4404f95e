//! Core type definitions for EventFlow.
//!
//! This crate defines the record types shared by every sync tier:
//! - `User` accounts with a fixed role set
//! - `EventRecord`, a stable identifier plus domain fields the sync
//!   layer carries opaquely
//! - `Snapshot`, the paired (users, events) state handed to the app
//!
//! Domain behavior (scheduling rules, validation, UI concerns) belongs
//! to the application, not here. The sync layer only needs each record's
//! identifier, exposed through the [`Keyed`] seam.

mod dates;
mod record;
mod snapshot;
mod user;

pub use dates::{display_date, iso_date, time_to_minutes, today_iso};
pub use record::{EventRecord, Keyed};
pub use snapshot::Snapshot;
pub use user::{User, UserRole};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown role: {0}")]
    UnknownRole(String),
}
