use std::sync::Arc;

use tokio::sync::Mutex;

use super::auth::SessionStore;
use crate::infrastructure::config::Config;
use crate::infrastructure::persistence::SqlitePageRepository;

/// Shared server state: the page store behind a lock (rusqlite connections
/// are not thread-safe), the in-process session table and the loaded config.
pub struct AppState {
    pub repo: Mutex<SqlitePageRepository>,
    pub sessions: SessionStore,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Arc<Self>> {
        let repo = SqlitePageRepository::new_with_path(&config.database_path)?;
        Ok(Arc::new(Self {
            repo: Mutex::new(repo),
            sessions: SessionStore::new(),
            config,
        }))
    }

    /// State over an in-memory store, for tests.
    pub fn new_in_memory(config: Config) -> anyhow::Result<Arc<Self>> {
        let repo = SqlitePageRepository::new_in_memory()?;
        Ok(Arc::new(Self {
            repo: Mutex::new(repo),
            sessions: SessionStore::new(),
            config,
        }))
    }
}
