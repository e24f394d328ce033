//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - One shared SqlitePool, injected through handler state
//! - Foreign keys enabled on every connection (subtask cascade relies on it)
//! - Transactions for multi-step operations

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_memory_pool, create_pool};
pub use repos::*;
