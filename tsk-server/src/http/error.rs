//! API error type with IntoResponse
//!
//! Errors become plain-text bodies. Storage errors carry the driver's own
//! message; there is no distinction between "not found" and success.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::repos::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request body is not the expected JSON (400)
    MalformedBody(String),

    /// Query string could not be decoded (400)
    MalformedQuery(String),

    /// Path id is not an integer (400)
    InvalidTaskId,

    /// Storage failure (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::MalformedBody(message) | Self::MalformedQuery(message) => {
                (StatusCode::BAD_REQUEST, message)
            }
            Self::InvalidTaskId => (StatusCode::BAD_REQUEST, "Invalid task ID".to_owned()),
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        (status, message).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn malformed_body_is_400_with_parser_text() {
        let response = ApiError::MalformedBody("expected value at line 1 column 1".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "expected value at line 1 column 1");
    }

    #[tokio::test]
    async fn invalid_task_id_is_400() {
        let response = ApiError::InvalidTaskId.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Invalid task ID");
    }

    #[tokio::test]
    async fn database_error_is_500_with_raw_text() {
        let err = ApiError::from(DbError::Sqlx(sqlx::Error::RowNotFound));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let content_type = response.headers()["content-type"].to_str().unwrap().to_owned();
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(body_text(response).await, sqlx::Error::RowNotFound.to_string());
    }
}
