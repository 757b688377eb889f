//! Seeder CLI - inserts the demo rows into the configured database:
//! two posts, then a user whose `post_ids` references both.

use relata_infra::auth::Argon2Hasher;
use relata_infra::database::{self, DatabaseConfig, PostgresPostStore, PostgresUserStore};
use relata_infra::seed;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt().with_env_filter("info").init();

    let Ok(url) = std::env::var("DATABASE_URL") else {
        tracing::error!("DATABASE_URL must be set to seed a database");
        std::process::exit(1);
    };

    let config = DatabaseConfig {
        url,
        max_connections: 5,
        min_connections: 1,
    };

    let conn = match database::connect(&config).await {
        Ok(conn) => conn,
        Err(e) => {
            tracing::error!("Failed to connect to database: {e}");
            std::process::exit(1);
        }
    };

    let users = PostgresUserStore::new(conn.clone());
    let posts = PostgresPostStore::new(conn);

    match seed::seed_demo(&users, &posts, &Argon2Hasher::new()).await {
        Ok(user) => tracing::info!(user_id = user.id, post_ids = ?user.post_ids, "Seed complete"),
        Err(e) => {
            tracing::error!("Seeding failed: {e}");
            std::process::exit(1);
        }
    }
}
