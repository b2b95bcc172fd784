//! HTTP error mapping.

use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use jobboard::JobboardError;
use serde_json::json;

/// A library error on its way to the client as `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError(pub JobboardError);

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError(JobboardError::validation(message))
    }
}

impl From<JobboardError> for ApiError {
    fn from(err: JobboardError) -> Self {
        ApiError(err)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            JobboardError::Validation(_) => StatusCode::BAD_REQUEST,
            JobboardError::NotFound(_) => StatusCode::NOT_FOUND,
            JobboardError::Conflict(_) => StatusCode::CONFLICT,
            JobboardError::Database(_) | JobboardError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("Request failed: {}", self.0);
        }
        HttpResponse::build(status).json(json!({ "error": self.0.to_string() }))
    }
}
