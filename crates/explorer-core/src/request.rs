// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP request handling for the explorer API
//!
//! [`RequestHandler`] owns the HTTP client, the base URL and the timeout. It
//! sends a single GET per call and turns the response status into either the
//! decoded JSON body or an [`ExplorerError`]. Nothing is retried.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::{
    config::ClientConfig,
    error::{ExplorerError, ExplorerResult},
    query::QueryParams,
};

/// Sends GET requests to the explorer and maps response statuses to errors
#[derive(Debug, Clone)]
pub struct RequestHandler {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl RequestHandler {
    /// Create a new request handler
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created
    pub fn new(config: &ClientConfig) -> ExplorerResult<Self> {
        let timeout = config.timeout.value();
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(ExplorerError::Http)?;

        let base_url = config.base_url.as_str().trim_end_matches('/').to_string();
        debug!(%base_url, ?timeout, "created explorer request handler");

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Send a GET request to `base_url/path` and decode the JSON body
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Timeout`] if the request times out, a status
    /// specific error for 400, 422 and 500, [`ExplorerError::Unknown`] for any
    /// other non-200 status, and [`ExplorerError::InvalidResponse`] if a 200
    /// body is not JSON
    pub async fn get(&self, path: &str, params: &QueryParams) -> ExplorerResult<Value> {
        let url = format!("{}/{}", self.base_url, path);

        debug!(%url, ?params, "sending explorer request");

        let mut request = self
            .client
            .get(&url)
            .header("accept", "application/json");
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = timeout(self.timeout, request.send())
            .await
            .map_err(|_| self.timed_out(&url))?
            .map_err(|e| self.transport_error(e, &url))?;

        self.check_result(response, &url).await
    }

    async fn check_result(&self, response: Response, url: &str) -> ExplorerResult<Value> {
        let status = response.status();

        if status == StatusCode::OK {
            let body = response
                .bytes()
                .await
                .map_err(|e| self.transport_error(e, url))?;
            let value = serde_json::from_slice(&body).map_err(|e| {
                ExplorerError::invalid_response(format!("{url} returned invalid JSON: {e}"))
            })?;
            debug!(url, "explorer request succeeded");
            return Ok(value);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        warn!(url, status = status.as_u16(), %body, "explorer returned an error status");

        Err(match status {
            StatusCode::INTERNAL_SERVER_ERROR => ExplorerError::Server { body },
            StatusCode::UNPROCESSABLE_ENTITY => ExplorerError::UnprocessableEntity {
                message: error_message(&body),
            },
            StatusCode::BAD_REQUEST => ExplorerError::BadRequest {
                message: error_message(&body),
            },
            other => ExplorerError::Unknown {
                status: other.as_u16(),
                body,
            },
        })
    }

    fn timed_out(&self, url: &str) -> ExplorerError {
        warn!(url, timeout = ?self.timeout, "explorer request timed out");
        ExplorerError::Timeout {
            timeout: self.timeout,
        }
    }

    fn transport_error(&self, error: reqwest::Error, url: &str) -> ExplorerError {
        if error.is_timeout() {
            return self.timed_out(url);
        }
        warn!(url, %error, "explorer request failed");
        ExplorerError::Http(error)
    }
}

/// Extract the `message` field of an error body, falling back to the raw body
fn error_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(mut fields)) => match fields.remove("message") {
            Some(Value::String(message)) => message,
            Some(other) => other.to_string(),
            None => body.to_string(),
        },
        _ => body.to_string(),
    }
}
