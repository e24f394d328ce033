//! Repository implementations for database access
//!
//! Each repository borrows the pool for the duration of one request.
//! Multi-statement writes run inside a transaction that rolls back on drop.

pub mod categories;
pub mod tasks;

pub use categories::{Category, CategoryRepo};
pub use tasks::{Task, TaskRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Driver error; displayed verbatim
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),
}
