//! Version endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;
use crate::VERSION;

#[derive(Serialize)]
struct VersionResponse {
    version: &'static str,
}

/// GET /version
async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: VERSION })
}

/// Version routes
pub fn router() -> Router<AppState> {
    Router::new().route("/version", get(version))
}
