//! Error types for the contact client.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation errors live in [`crate::domain::ValidationError`].

use thiserror::Error;

/// Errors that can occur when sending a submission to the contact endpoint.
#[derive(Error, Debug)]
pub enum ContactApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Could not reach the endpoint at all
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Endpoint returned a non-2xx status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to encode the request body
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Client-side timeout elapsed before a response arrived
    #[error("Request timeout")]
    Timeout,
}

impl ContactApiError {
    /// HTTP status of the response, if the endpoint answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the request was cancelled by the client-side timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with ContactApiError
pub type ContactApiResult<T> = Result<T, ContactApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
