//! SEO agent error types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use shared::SharedError;
use thiserror::Error;

/// Result type for agent operations
pub type AgentResult<T> = Result<T, AgentError>;

/// Reasons a chat-completions request did not produce usable text
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiFailure {
    /// No API key configured
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,

    /// Authentication failed (invalid API key)
    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("rate limit exceeded")]
    RateLimitExceeded,

    #[error("service temporarily unavailable")]
    ServiceUnavailable,

    #[error("request timed out")]
    Timeout,

    /// Network/connection error
    #[error("network error: {0}")]
    NetworkError(String),

    /// Non-success status not covered above
    #[error("server error: {0}")]
    ServerError(String),

    /// Response body did not have the expected shape
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// SEO agent error types
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("No content fetched from {url}")]
    FetchFailed { url: String },

    #[error("SEO analysis failed: {0}")]
    AnalysisFailed(#[from] ApiFailure),

    #[error("Model reported an error: {0}")]
    ModelReportedError(String),

    #[error("Failed to write report {path}: {message}")]
    ReportWrite { path: PathBuf, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Shared error: {0}")]
    SharedError(#[from] SharedError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AgentError {
    pub fn config(message: impl Into<String>) -> Self {
        AgentError::ConfigError { message: message.into() }
    }

    pub fn report_write(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        AgentError::ReportWrite {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
