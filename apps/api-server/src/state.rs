//! Application state - shared across all handlers.

use std::sync::Arc;

use relata_core::ports::{PostStore, UserStore};
use relata_infra::auth::Argon2Hasher;
use relata_infra::database::{
    self, DatabaseConfig, InMemoryPostStore, InMemoryUserStore, PostgresPostStore,
    PostgresUserStore,
};
use relata_infra::seed;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub posts: Arc<dyn PostStore>,
    /// Which store backend is active; reported by the health check.
    pub backend: &'static str,
}

impl AppState {
    /// Build the application state with appropriate store implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        if let Some(config) = db_config {
            match database::connect(config).await {
                Ok(conn) => {
                    return Self {
                        users: Arc::new(PostgresUserStore::new(conn.clone())),
                        posts: Arc::new(PostgresPostStore::new(conn)),
                        backend: "postgres",
                    };
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {e}. Using in-memory fallback."
                    );
                }
            }
        } else {
            tracing::warn!("DATABASE_URL not set. Running with in-memory stores.");
        }

        Self::in_memory().await
    }

    /// Seeded in-memory state, so the demo works without a database.
    pub async fn in_memory() -> Self {
        let users = Arc::new(InMemoryUserStore::new());
        let posts = Arc::new(InMemoryPostStore::new());

        if let Err(e) =
            seed::seed_demo(users.as_ref(), posts.as_ref(), &Argon2Hasher::new()).await
        {
            tracing::error!("Failed to seed in-memory stores: {e}");
        }

        Self {
            users,
            posts,
            backend: "in-memory",
        }
    }
}
