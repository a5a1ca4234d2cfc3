//! Mapping of service failures to HTTP responses

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::core::validation::FieldError;
use crate::core::ServiceError;

/// Error returned by playlist handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid playlist: {} violation(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("{0}")]
    NotFound(String),

    /// Malformed body or path
    #[error("{0}")]
    BadRequest(String),

    #[error("internal error: {0}")]
    Internal(anyhow::Error),
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(message) => ApiError::NotFound(message),
            ServiceError::Storage(e) => ApiError::Internal(e),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Validation(errors) => json!({ "fieldErrors": errors }),
            ApiError::NotFound(message) | ApiError::BadRequest(message) => {
                json!({ "message": message })
            }
            ApiError::Internal(e) => {
                tracing::error!("Request failed: {:#}", e);
                json!({ "message": "Internal server error" })
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
