//! Event records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A record that exposes the stable identifier used as its storage key.
///
/// This is the only thing the sync layer needs from a record; everything
/// else is domain data.
pub trait Keyed {
    /// The unique identifier for this record.
    fn key(&self) -> &str;
}

/// An application event record.
///
/// Only `id` is interpreted by the sync layer. Date, time, description
/// and any other domain fields travel in `fields` and round-trip
/// unchanged through every tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Stable unique identifier, used as the storage key in every tier.
    pub id: String,
    /// Domain fields, preserved as-is.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl EventRecord {
    /// Creates a record with the given id and no domain fields.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    /// Sets a domain field, builder-style.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Returns a domain field as a string, if present and a string.
    #[must_use]
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }
}

impl Keyed for EventRecord {
    fn key(&self) -> &str {
        &self.id
    }
}
