//! API error types with HTTP response mapping.

use application::ApplicationError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::DomainError;
use serde::Serialize;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request from the client.
    BadRequest(String),
    /// A use case failed.
    Application(ApplicationError),
}

#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    pub message: String,
}

/// Body of a 422 response: the rejection message and every error in order.
#[derive(Debug, Serialize)]
pub struct ValidationErrorBody {
    pub message: String,
    pub errors: Vec<ErrorMessage>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorMessage { message })).into_response()
            }
            ApiError::Application(ApplicationError::Domain(DomainError::Validation {
                message,
                errors,
            })) => {
                let body = ValidationErrorBody {
                    message,
                    errors: errors
                        .into_iter()
                        .map(|e| ErrorMessage {
                            message: e.message().to_string(),
                        })
                        .collect(),
                };
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            ApiError::Application(ApplicationError::Domain(DomainError::NotFound(error))) => (
                StatusCode::NOT_FOUND,
                Json(ErrorMessage {
                    message: error.message().to_string(),
                }),
            )
                .into_response(),
            ApiError::Application(ApplicationError::Gateway(err)) => {
                tracing::error!(error = %err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorMessage {
                        message: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        ApiError::Application(err)
    }
}
