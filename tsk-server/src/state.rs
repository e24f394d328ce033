//! Application state shared across handlers
//!
//! Holds the one SQLite pool opened at startup. Repositories borrow it per
//! request; nothing else is kept between requests.

use sqlx::SqlitePool;
use std::sync::Arc;

/// Shared application state, cloned into every handler
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            inner: Arc::new(AppStateInner { pool }),
        }
    }

    /// Pool for the task database. `run_server` closes it on shutdown.
    pub fn pool(&self) -> &SqlitePool {
        &self.inner.pool
    }
}
