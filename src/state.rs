use std::sync::Arc;

use lema_config::AppConfig;
use sqlx::SqlitePool;

use crate::modules::posts::{PostService, SqlxPostRepository};
use crate::modules::users::{SqlxUserRepository, UserService};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: UserService,
    pub posts: PostService,
}

impl AppState {
    /// Wires the SQLite-backed repositories into services sharing one pool.
    pub fn new(db: SqlitePool, config: AppConfig) -> Self {
        let deadline = config.server.request_timeout;

        Self {
            users: UserService::new(Arc::new(SqlxUserRepository::new(db.clone())), deadline),
            posts: PostService::new(Arc::new(SqlxPostRepository::new(db)), deadline),
            config: Arc::new(config),
        }
    }
}
