/// Error types for News Service
///
/// `AppError` is the taxonomy surfaced by the service layer. Only the HTTP
/// layer turns it into a status code, and the response body is always a
/// fixed message: storage and decoder detail stays in the logs.
use crate::db::StoreError;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Result type for news-service operations
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No record with the requested identifier
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request payload could not be decoded
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Underlying persistence failure (connectivity, constraint, timeout)
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl AppError {
    /// Message sent to the client for this error kind
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "News not found",
            AppError::InvalidInput(_) => "Invalid JSON",
            AppError::Storage(_) => "Internal Server Error",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Storage(err) = self {
            tracing::error!(error = %err, "Storage failure while serving request");
        }

        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.public_message(),
        }))
    }
}
