//! Key-value storage capability.
//!
//! The server only needs four operations from its backing store. Values are
//! opaque JSON strings here; typed decoding happens in the repository.

pub mod memory;
pub mod rest;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::StoreConfig;

pub use memory::MemoryStore;
pub use rest::RestKvStore;

/// Failure of a store operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached or the response could not be read.
    #[error("store transport error: {0}")]
    Transport(String),
    /// The store answered with an error.
    #[error("store backend error: {0}")]
    Backend(String),
    /// A value could not be encoded for writing.
    #[error("store encode error: {0}")]
    Encode(String),
}

pub type SharedStore = Arc<dyn KvStore>;

#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;

    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    async fn list_keys_by_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError>;

    /// Short backend name for health output and logs.
    fn backend_name(&self) -> &'static str;
}

/// Pick the store described by `config`: the REST service when both URL and
/// token are present, otherwise an in-process map.
pub fn from_config(config: &StoreConfig) -> SharedStore {
    match (&config.rest_url, &config.rest_token) {
        (Some(url), Some(token)) => {
            tracing::info!(url = %url, "Using REST key-value store");
            Arc::new(RestKvStore::new(url.clone(), token.clone()))
        },
        _ => {
            tracing::info!("No key-value service configured, using in-memory store");
            Arc::new(MemoryStore::new())
        },
    }
}
