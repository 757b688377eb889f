//! # Relata Core
//!
//! The domain layer of the relata demo.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! the `User`/`Post` entities, the store ports, and the relation resolver that
//! turns a JSON-backed id list into the posts it references.

pub mod domain;
pub mod error;
pub mod ports;
pub mod relation;

pub use error::DomainError;
