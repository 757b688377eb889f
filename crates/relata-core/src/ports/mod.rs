//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod password;
mod store;

pub use password::{PasswordError, PasswordHasher};
pub use store::{PostStore, UserStore};
