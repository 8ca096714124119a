//! Request-level error taxonomy and its mapping onto HTTP responses.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::media::catalog::CatalogError;
use crate::range::{unsatisfied_content_range, RangeError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("failed to read media catalog")]
    CatalogUnavailable(#[source] CatalogError),

    /// Missing file and disallowed path alike.
    #[error("video not found")]
    NotFound,

    #[error("invalid range header")]
    InvalidRange { total: u64 },

    #[error("range not satisfiable")]
    RangeNotSatisfiable { total: u64 },

    #[error("failed to open video")]
    Io(#[source] std::io::Error),
}

impl AppError {
    pub fn from_range(err: RangeError, total: u64) -> Self {
        match err {
            RangeError::Invalid => AppError::InvalidRange { total },
            RangeError::NotSatisfiable => AppError::RangeNotSatisfiable { total },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::CatalogUnavailable(_) | AppError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::InvalidRange { .. } | AppError::RangeNotSatisfiable { .. } => {
                StatusCode::RANGE_NOT_SATISFIABLE
            }
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(e: CatalogError) -> Self {
        AppError::CatalogUnavailable(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::CatalogUnavailable(e) => tracing::error!("Catalog unavailable: {}", e),
            AppError::Io(e) => tracing::error!("Video I/O error: {}", e),
            _ => tracing::debug!(status = %status, "{}", self),
        }

        match self {
            // 416 carries the size so the client can retry with a valid range
            AppError::InvalidRange { total } | AppError::RangeNotSatisfiable { total } => (
                status,
                [(header::CONTENT_RANGE, unsatisfied_content_range(total))],
            )
                .into_response(),
            other => (status, Json(json!({ "error": other.to_string() }))).into_response(),
        }
    }
}
