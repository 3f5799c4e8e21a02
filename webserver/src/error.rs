//! Lead service error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("No data provided")]
    NoData,

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Record store write failed for {path}: {message}")]
    PersistenceFailed { path: String, message: String },

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl WebServerError {
    pub fn config(message: impl Into<String>) -> Self {
        WebServerError::ConfigError(message.into())
    }

    /// Caller mistakes that map to 400; everything else is a 500
    pub fn is_client_error(&self) -> bool {
        matches!(self, WebServerError::NoData | WebServerError::MissingField { .. })
    }

    pub fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Internal details stay in the logs
        let message = if self.is_client_error() {
            self.to_string()
        } else {
            "Internal server error".to_string()
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;

/// Failure to deliver one notification email
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NotificationError {
    #[error("Mail transport is not configured")]
    NotConfigured,

    #[error("Invalid address {address}: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("Message could not be built: {0}")]
    MessageBuild(String),

    #[error("SMTP transport error: {0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_client_errors() {
        assert_eq!(WebServerError::NoData.status_code(), StatusCode::BAD_REQUEST);
        let missing = WebServerError::MissingField { field: "lastName".to_string() };
        assert_eq!(missing.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(missing.to_string(), "Missing required field: lastName");
    }

    #[test]
    fn test_persistence_errors_are_server_errors() {
        let err = WebServerError::PersistenceFailed {
            path: "leads.csv".to_string(),
            message: "disk full".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let csv: WebServerError = csv::Error::from(std::io::Error::new(std::io::ErrorKind::Other, "boom")).into();
        assert!(!csv.is_client_error());
    }
}
