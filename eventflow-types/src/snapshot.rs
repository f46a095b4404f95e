//! Point-in-time pairing of the user and event collections.

use crate::record::EventRecord;
use crate::user::User;
use serde::{Deserialize, Serialize};

/// The full application state at a point in time.
///
/// Collections are replaced wholesale when a fresher source supplies
/// them; fields are never merged across sources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// All user accounts.
    pub users: Vec<User>,
    /// All event records.
    pub events: Vec<EventRecord>,
}

impl Snapshot {
    /// Pairs the two collections.
    #[must_use]
    pub fn new(users: Vec<User>, events: Vec<EventRecord>) -> Self {
        Self { users, events }
    }

    /// Whether both collections are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.events.is_empty()
    }
}
