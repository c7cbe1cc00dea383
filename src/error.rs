use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed request payload or query string
    #[error("validation failed: {0}")]
    Validation(String),
    /// Model artifact or inference failure
    #[error("prediction failed: {0}")]
    Prediction(String),
    /// Forecast fetch or response-parsing failure
    #[error("weather query failed: {0}")]
    Weather(String),
}

impl AppError {
    /// The underlying message, as surfaced in the wire-level `detail` field
    pub fn detail(&self) -> &str {
        match self {
            AppError::Validation(msg) | AppError::Prediction(msg) | AppError::Weather(msg) => msg,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Prediction(_) | AppError::Weather(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            detail: self.detail().to_string(),
        })
    }
}

/// Map body deserialization failures to a client validation error
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Validation(err.to_string()).into()
}

/// Map query string deserialization failures to a client validation error
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Validation(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::Validation("missing field".to_string());
        assert!(err.to_string().contains("validation failed"));
    }

    #[test]
    fn test_detail_is_raw_message() {
        let err = AppError::Weather("connection refused".to_string());
        assert_eq!(err.detail(), "connection refused");
    }

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::Validation(String::new()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::Prediction(String::new()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Weather(String::new()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
