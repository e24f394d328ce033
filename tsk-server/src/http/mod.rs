//! HTTP server layer
//!
//! Axum server with:
//! - JSON API under `/api`
//! - Permissive CORS
//! - Request tracing and timeout
//! - Optional static front-end for all other paths
//! - Plain-text error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, ServerConfig, ServerError};
