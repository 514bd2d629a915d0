use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::domains::websites::FetchError;

/// Errors surfaced by HTTP handlers
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or empty required query parameter
    #[error("{0}")]
    Validation(String),

    #[error("{message}")]
    NotFound {
        message: String,
        search_term: String,
    },

    #[error("Database connection failed")]
    StoreConnection(#[source] sqlx::Error),

    #[error("Database query failed")]
    StoreQuery(#[source] anyhow::Error),
}

/// JSON body for every error response from the lookup endpoints
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::StoreConnection(_) | ApiError::StoreQuery(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Map a fetch failure, naming the lookup kind in the not-found message
    pub fn from_fetch(err: FetchError, lookup_kind: &str) -> Self {
        match err {
            FetchError::NotFound(search_term) => ApiError::NotFound {
                message: format!("No website found with {}: {}", lookup_kind, search_term),
                search_term,
            },
            FetchError::Connection(e) => ApiError::StoreConnection(e),
            FetchError::Query(e) => ApiError::StoreQuery(e),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::StoreQuery(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Store details stay in the log; callers get the generic message
        match &self {
            ApiError::StoreConnection(e) => error!(error = %e, "Database connection failed"),
            ApiError::StoreQuery(e) => error!(error = ?e, "Database query failed"),
            _ => {}
        }

        let search_term = match &self {
            ApiError::NotFound { search_term, .. } => Some(search_term.clone()),
            _ => None,
        };

        let body = ErrorBody {
            status: "error",
            message: self.to_string(),
            code: status.as_u16(),
            search_term,
        };

        (status, Json(body)).into_response()
    }
}
