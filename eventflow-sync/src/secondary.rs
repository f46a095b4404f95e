//! Remote secondary store client.
//!
//! The secondary tier is a REST backend with one endpoint per collection
//! (`/users`, `/events`) plus per-record endpoints for partial updates.
//! Collection bodies are plain JSON arrays of full records.

use crate::error::{SyncError, SyncResult};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Configuration for the secondary store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecondaryConfig {
    /// Base URL of the REST API.
    pub api_base_url: String,
}

impl Default for SecondaryConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3001/api".to_string(),
        }
    }
}

/// Client for the secondary store's collection endpoints.
#[derive(Debug, Clone)]
pub struct SecondaryStore {
    config: SecondaryConfig,
    client: Client,
}

impl Default for SecondaryStore {
    fn default() -> Self {
        Self::new(SecondaryConfig::default())
    }
}

impl SecondaryStore {
    /// Creates a client for the configured API.
    #[must_use]
    pub fn new(config: SecondaryConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// The configured API parameters.
    pub fn config(&self) -> &SecondaryConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.config.api_base_url.trim_end_matches('/'))
    }

    /// Fetches a collection as a JSON array of records.
    pub async fn get_collection<T: DeserializeOwned>(&self, path: &str) -> SyncResult<Vec<T>> {
        let url = self.url(path);
        debug!("secondary read: {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SyncError::Network(format!("secondary read failed: {e}")))?;

        if !response.status().is_success() {
            return Err(SyncError::Network(format!(
                "secondary read failed: HTTP {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| SyncError::MalformedResponse(format!("secondary read body: {e}")))
    }

    /// Overwrites a collection with a full-array `PUT`.
    pub async fn put_collection<T: Serialize + Sync>(
        &self,
        path: &str,
        records: &[T],
    ) -> SyncResult<()> {
        let url = self.url(path);
        debug!("secondary write: {url} ({} records)", records.len());

        let response = self
            .client
            .put(&url)
            .json(&records)
            .send()
            .await
            .map_err(|e| SyncError::Network(format!("secondary write failed: {e}")))?;

        if !response.status().is_success() {
            return Err(SyncError::Network(format!(
                "secondary write failed: HTTP {}",
                response.status()
            )));
        }

        Ok(())
    }

    /// Applies a partial-field update to a single record.
    pub async fn put_record(&self, path: &str, id: &str, patch: &Value) -> SyncResult<()> {
        let url = self.url(&format!("{path}/{id}"));
        debug!("secondary record update: {url}");

        let response = self
            .client
            .put(&url)
            .json(patch)
            .send()
            .await
            .map_err(|e| SyncError::Network(format!("record update failed: {e}")))?;

        if !response.status().is_success() {
            return Err(SyncError::Network(format!(
                "record update failed: HTTP {}",
                response.status()
            )));
        }

        Ok(())
    }
}
