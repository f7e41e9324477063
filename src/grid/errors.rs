//! Grid protocol error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::query::QueryError;

/// Result type for grid operations
pub type GridResult<T> = Result<T, GridError>;

/// Errors surfaced by the grid layer
#[derive(Debug, Clone, Error)]
pub enum GridError {
    /// Malformed or out-of-contract request parameters
    #[error("invalid request: {0}")]
    Validation(String),

    /// The backing store failed; the caller may resubmit
    #[error("store error: {0}")]
    Store(String),
}

impl GridError {
    /// Creates a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        GridError::Validation(message.into())
    }

    /// HTTP status for this error when it cannot be answered in-protocol
    pub fn status_code(&self) -> StatusCode {
        match self {
            GridError::Validation(_) => StatusCode::BAD_REQUEST,
            GridError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<QueryError> for GridError {
    fn from(e: QueryError) -> Self {
        match e {
            QueryError::UnknownColumn(_) | QueryError::UnsortableColumn(_) => {
                GridError::Validation(e.to_string())
            }
            QueryError::Store(inner) => GridError::Store(inner.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: u16,
}

impl From<GridError> for ErrorBody {
    fn from(err: GridError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for GridError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorBody::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            GridError::validation("negative start").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GridError::Store("down".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_query_error_mapping() {
        let err = GridError::from(QueryError::UnknownColumn(99));
        assert!(matches!(err, GridError::Validation(_)));

        let err = GridError::from(QueryError::Store(SourceError::unavailable("down")));
        assert!(matches!(err, GridError::Store(_)));
    }
}
