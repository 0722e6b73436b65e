//! Database layer - connection pool, schema, and repositories

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_lazy_pool, create_pool};
