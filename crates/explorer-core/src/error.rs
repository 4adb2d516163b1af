// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for explorer API operations
//!
//! Errors fall into two groups. Client-side errors ([`ExplorerError::BadParam`],
//! [`ExplorerError::Config`]) are raised before any request is sent. Every
//! other variant is an API error produced by the request itself. Neither group
//! is retried at this layer.

use std::time::Duration;

use thiserror::Error;

/// Result type alias for explorer API operations
pub type ExplorerResult<T> = Result<T, ExplorerError>;

/// Errors returned by the explorer client
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ExplorerError {
    /// A filter argument is outside its allowed set
    #[error("Invalid parameter: {message}")]
    BadParam { message: String },

    /// Client configuration is invalid
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The request did not complete within the configured timeout
    #[error("Request timeout after {timeout:?}")]
    Timeout { timeout: Duration },

    /// HTTP 400
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// HTTP 422
    #[error("Unprocessable entity: {message}")]
    UnprocessableEntity { message: String },

    /// HTTP 500
    #[error("Explorer server error")]
    Server { body: String },

    /// Any status the client does not map explicitly
    #[error("{status}: {body}")]
    Unknown { status: u16, body: String },

    /// Transport failure other than a timeout
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body does not have the expected shape
    #[error("Invalid response format: {message}")]
    InvalidResponse { message: String },
}

impl ExplorerError {
    /// Create a parameter error
    pub fn bad_param(message: impl Into<String>) -> Self {
        Self::BadParam {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid response error
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Whether the error was produced by a request rather than local validation
    pub fn is_api_error(&self) -> bool {
        !matches!(self, Self::BadParam { .. } | Self::Config { .. })
    }

    /// Whether the error is a rejected filter argument
    pub fn is_param_error(&self) -> bool {
        matches!(self, Self::BadParam { .. })
    }

    /// HTTP status code of the failed response, when one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest { .. } => Some(400),
            Self::UnprocessableEntity { .. } => Some(422),
            Self::Server { .. } => Some(500),
            Self::Unknown { status, .. } => Some(*status),
            Self::Http(error) => error.status().map(|status| status.as_u16()),
            _ => None,
        }
    }
}
