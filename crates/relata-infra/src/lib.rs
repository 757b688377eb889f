//! # Relata Infrastructure
//!
//! Concrete implementations of the ports defined in `relata-core`:
//! SeaORM/Postgres stores, in-memory stores, Argon2 password hashing, and
//! the demo seed data.

pub mod auth;
pub mod database;
pub mod seed;

pub use auth::Argon2Hasher;
pub use database::{
    DatabaseConfig, InMemoryPostStore, InMemoryUserStore, PostgresPostStore, PostgresUserStore,
};
