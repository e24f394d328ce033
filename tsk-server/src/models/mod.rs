//! Request models
//!
//! Shapes of the JSON bodies and query strings the API accepts.

pub mod task;

pub use task::{ReorderEntry, ReorderRequest, TaskFields, TaskFilter, TaskFilterParams};
