//! tsk-server: HTTP task store
//!
//! Stores categories and nested tasks in SQLite and exposes them over a
//! small JSON API under `/api`. Completing a task deletes it together with
//! its subtasks.

pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use http::{build_router, run_server, ApiError, ServerConfig};
pub use state::AppState;

/// Version reported by `GET /api/version`.
///
/// Set `TSK_VERSION` at build time to override the crate version.
pub const VERSION: &str = match option_env!("TSK_VERSION") {
    Some(v) => v,
    None => env!("CARGO_PKG_VERSION"),
};
