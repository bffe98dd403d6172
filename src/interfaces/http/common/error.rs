//! Maps handler failures onto HTTP responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Message returned when the request body is missing or not valid JSON.
pub const REQUIRED_FIELDS_MESSAGE: &str = "entryDateTime and exitDateTime is required";

/// Error envelope returned by every failing endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Everything a handler can fail with, each mapped to one status code.
#[derive(Debug)]
pub enum ApiError {
    /// The request body could not be read as JSON at all.
    InvalidBody(JsonRejection),
    /// The billing core rejected the session.
    Domain(DomainError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::InvalidBody(rejection) => {
                tracing::debug!(%rejection, "request body rejected");
                (StatusCode::BAD_REQUEST, REQUIRED_FIELDS_MESSAGE.to_string())
            }
            Self::Domain(err) => {
                let status = match err {
                    DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
                    DomainError::NoApplicableRate => StatusCode::UNPROCESSABLE_ENTITY,
                };
                (status, err.to_string())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
