//! Remote primary store client.
//!
//! The primary tier is a keyed-document realtime database addressed by
//! collection name over its REST surface: `GET
//! {database_url}/{collection}.json` returns the collection value, or
//! JSON `null` when the collection does not exist, and a `PUT` of an
//! id-keyed object replaces the whole collection.
//!
//! Reads here carry no deadline of their own; the secondary tier owns
//! the only explicit timeout in the read path. A primary endpoint that
//! stalls past its connection-level limits therefore stalls the read
//! path with it — known risk, kept to match the managed connection's
//! own timeout handling.

use crate::error::{SyncError, SyncResult};
use eventflow_types::Keyed;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::env;
use tracing::debug;

/// Connection parameters for the primary store.
///
/// Every field falls back to the demo project when the corresponding
/// environment variable is unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimaryConfig {
    /// API key for the managed connection.
    pub api_key: String,
    /// Project identifier.
    pub project_id: String,
    /// Base URL of the realtime database.
    pub database_url: String,
    /// Application identifier.
    pub app_id: String,
}

impl Default for PrimaryConfig {
    fn default() -> Self {
        Self {
            api_key: "demo-api-key".to_string(),
            project_id: "eventflow-demo".to_string(),
            database_url: "https://eventflow-demo-default-rtdb.firebaseio.com".to_string(),
            app_id: "1:000000000000:web:eventflow".to_string(),
        }
    }
}

impl PrimaryConfig {
    /// Builds a config from `EVENTFLOW_API_KEY`, `EVENTFLOW_PROJECT_ID`,
    /// `EVENTFLOW_DATABASE_URL` and `EVENTFLOW_APP_ID`, falling back to
    /// the defaults for any variable that is unset.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: env::var("EVENTFLOW_API_KEY").unwrap_or(defaults.api_key),
            project_id: env::var("EVENTFLOW_PROJECT_ID").unwrap_or(defaults.project_id),
            database_url: env::var("EVENTFLOW_DATABASE_URL").unwrap_or(defaults.database_url),
            app_id: env::var("EVENTFLOW_APP_ID").unwrap_or(defaults.app_id),
        }
    }
}

/// Client for the primary store's collection endpoints.
pub struct PrimaryStore {
    config: PrimaryConfig,
    client: Client,
}

impl PrimaryStore {
    /// Creates a client for the configured database.
    #[must_use]
    pub fn new(config: PrimaryConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// The configured connection parameters.
    pub fn config(&self) -> &PrimaryConfig {
        &self.config
    }

    fn collection_url(&self, name: &str) -> String {
        format!("{}/{name}.json", self.config.database_url.trim_end_matches('/'))
    }

    /// Reads a whole collection.
    ///
    /// Returns `None` when the collection does not exist. The store
    /// serves dense integer-keyed collections as JSON arrays with null
    /// holes, so both the keyed-object form and the array form are
    /// accepted.
    pub async fn read_collection<T: DeserializeOwned>(
        &self,
        name: &str,
    ) -> SyncResult<Option<Vec<T>>> {
        let url = self.collection_url(name);
        debug!("primary read: {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SyncError::Network(format!("primary read failed: {e}")))?;

        if !response.status().is_success() {
            return Err(SyncError::Network(format!(
                "primary read failed: HTTP {}",
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SyncError::MalformedResponse(format!("primary read body: {e}")))?;

        decode_collection(body)
    }

    /// Replaces a whole collection with an id-keyed overwrite.
    pub async fn write_collection<T>(&self, name: &str, records: &[T]) -> SyncResult<()>
    where
        T: Serialize + Keyed + Sync,
    {
        let keyed: BTreeMap<&str, &T> = records.iter().map(|r| (r.key(), r)).collect();
        let url = self.collection_url(name);
        debug!("primary write: {url} ({} records)", records.len());

        let response = self
            .client
            .put(&url)
            .json(&keyed)
            .send()
            .await
            .map_err(|e| SyncError::Network(format!("primary write failed: {e}")))?;

        if !response.status().is_success() {
            return Err(SyncError::Network(format!(
                "primary write failed: HTTP {}",
                response.status()
            )));
        }

        Ok(())
    }
}

/// Decodes a collection body in either of the store's wire forms.
fn decode_collection<T: DeserializeOwned>(body: Value) -> SyncResult<Option<Vec<T>>> {
    let values: Vec<Value> = match body {
        Value::Null => return Ok(None),
        Value::Object(map) => map.into_iter().map(|(_, value)| value).collect(),
        // Dense integer keys come back as an array, with null holes for
        // any gaps.
        Value::Array(slots) => slots.into_iter().filter(|v| !v.is_null()).collect(),
        _ => {
            return Err(SyncError::MalformedResponse(
                "expected keyed collection or array".to_string(),
            ));
        }
    };

    values
        .into_iter()
        .map(|value| serde_json::from_value(value).map_err(SyncError::from))
        .collect::<SyncResult<Vec<T>>>()
        .map(Some)
}
