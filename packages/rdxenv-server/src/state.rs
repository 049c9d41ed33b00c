use std::sync::Arc;

use rdxenv_content::ContentStore;

use crate::ServerConfig;

/// Shared application state for the HTTP server
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    store: ContentStore,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let store = ContentStore::new(config.data_dir.clone());
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    pub fn store(&self) -> &ContentStore {
        &self.inner.store
    }
}
