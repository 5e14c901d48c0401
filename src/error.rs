use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use std::fmt;
use tracing::error;
use validator::ValidationErrors;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Conflict(String),
    Validation(ValidationErrors),
    Database(sqlx::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::Validation(errors) => write!(f, "Validation failed: {}", errors),
            ApiError::Database(e) => write!(f, "Database Error: {}", e),
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::NotFound(msg) => HttpResponse::NotFound().json(json!({ "message": msg })),
            // The original surfaces duplicate email/code as 400, not 409.
            ApiError::Conflict(msg) => HttpResponse::BadRequest().json(json!({ "message": msg })),
            ApiError::Validation(errors) => HttpResponse::BadRequest().json(json!({
                "message": "Validation failed",
                "errors": errors,
            })),
            ApiError::Database(e) => {
                error!(error = %e, "Database operation failed");
                HttpResponse::InternalServerError().json(json!({
                    "message": "Internal Server Error"
                }))
            }
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::Database(e)
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}
