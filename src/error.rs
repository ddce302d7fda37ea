//! API error type and its JSON rendering.

use crate::models::ErrorResponse;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};

/// Errors surfaced to API clients
///
/// Every variant is terminal for the request and renders as
/// `{"error": "<message>"}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("City is required")]
    MissingParameter,

    #[error("{0}")]
    MalformedRequest(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token is missing!")]
    MissingToken,

    #[error("Token is invalid!")]
    InvalidToken,

    /// Server-side failure; the detail is logged, never sent to the client
    #[error("Internal server error")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter | ApiError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials | ApiError::MissingToken | ApiError::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Internal(reason) = self {
            tracing::error!(reason = %reason, "Request failed");
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
