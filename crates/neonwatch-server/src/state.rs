use std::sync::Arc;

use crate::config::ServerConfig;
use crate::repository::StatsRepository;
use crate::store::{self, SharedStore};

#[derive(Clone)]
pub struct AppState {
    pub repository: StatsRepository,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build state with the store selected by `config`.
    pub fn new(config: ServerConfig) -> Self {
        let store = store::from_config(&config.store);
        Self::with_store(config, store)
    }

    /// Build state around an explicitly constructed store.
    pub fn with_store(config: ServerConfig, store: SharedStore) -> Self {
        Self {
            repository: StatsRepository::new(store, config.store.namespace.clone()),
            config: Arc::new(config),
        }
    }
}
