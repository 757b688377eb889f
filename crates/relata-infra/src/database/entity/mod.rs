//! SeaORM entities for the two tables backing the demo.

pub mod post;
pub mod user;
