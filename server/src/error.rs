//! Errors returned to API callers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON body of every error response.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

/// Failures surfaced at the HTTP boundary.
///
/// The display string is the exact message sent to the caller. Storage
/// detail never reaches it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No row with the requested id. Carries the entity's display name.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The persistence call failed. Carries the noun that was being fetched.
    #[error("Failed to fetch {0}")]
    FetchFailed(&'static str),

    /// No route matched the request path.
    #[error("Not found")]
    UnknownRoute,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) | ApiError::UnknownRoute => StatusCode::NOT_FOUND,
            ApiError::FetchFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
