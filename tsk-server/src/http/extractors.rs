//! Custom Axum extractors
//!
//! Each one turns axum's rejection into an [`ApiError`] so every client
//! error is reported the same way.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{TaskFilter, TaskFilterParams};

/// JSON request body, parsed whatever the `Content-Type` header says.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::MalformedBody(e.body_text()))?;

        let value = serde_json::from_slice(&bytes).map_err(|e| ApiError::MalformedBody(e.to_string()))?;
        Ok(Self(value))
    }
}

/// Extract a numeric task id from path
pub struct TaskId(pub i64);

impl<S> FromRequestParts<S> for TaskId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidTaskId)?;

        let id = id.parse().map_err(|_| ApiError::InvalidTaskId)?;
        Ok(Self(id))
    }
}

/// Extract the `GET /tasks` filter from the query string
pub struct TaskQuery(pub TaskFilter);

impl<S> FromRequestParts<S> for TaskQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<TaskFilterParams> = Query::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::MalformedQuery(e.body_text()))?;

        Ok(Self(TaskFilter::from(params)))
    }
}
