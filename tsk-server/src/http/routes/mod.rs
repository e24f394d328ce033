//! API route handlers, mounted under `/api`
//!
//! Organized by resource type:
//! - version: build version
//! - categories: category listing
//! - tasks: task CRUD, completion and reordering

pub mod categories;
pub mod tasks;
pub mod version;
