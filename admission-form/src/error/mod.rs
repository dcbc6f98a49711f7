//! Error types and error handling
//!
//! Validation failures are not errors here; they travel as
//! [`ErrorMap`](crate::registration::ErrorMap) and render inline. `AppError`
//! covers infrastructure failures only.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Template rendering error
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<p class=\"form-error\">Something went wrong. Please try again.</p>"),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = AppError::Config("port out of range".into());
        assert_eq!(err.to_string(), "Configuration error: port out of range");
    }

    #[test]
    fn test_io_from() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::AddrInUse, "busy").into();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn test_into_response_is_500() {
        let response = AppError::Config("boom".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
