//! Category endpoints

use axum::{extract::State, routing::get, Json, Router};

use crate::db::repos::{Category, CategoryRepo};
use crate::http::error::ApiError;
use crate::state::AppState;

/// GET /categories - all categories sorted by name
async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>, ApiError> {
    let categories = CategoryRepo::new(state.pool()).list().await?;
    Ok(Json(categories))
}

/// Category routes
pub fn router() -> Router<AppState> {
    Router::new().route("/categories", get(list_categories))
}
