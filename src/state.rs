use std::sync::Arc;

use crate::auth::SessionKeys;
use crate::config::AppConfig;
use crate::database::DatabaseManager;

/// Shared, read-only context handed to every handler
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: DatabaseManager,
    pub sessions: Arc<SessionKeys>,
}

impl AppState {
    pub fn new(config: AppConfig, db: DatabaseManager) -> Self {
        let sessions = SessionKeys::from_config(&config.security);
        Self {
            config: Arc::new(config),
            db,
            sessions: Arc::new(sessions),
        }
    }
}
