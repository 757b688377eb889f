//! Store implementations: SeaORM/Postgres plus the in-memory fallback.

mod connections;
pub mod entity;
mod memory;
mod postgres_base;
mod postgres_repo;

pub use connections::{DatabaseConfig, connect};
pub use memory::{InMemoryPostStore, InMemoryUserStore};
pub use postgres_repo::{PostgresPostStore, PostgresUserStore};
