// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Client configuration
//!
//! Configuration is fixed at construction time. The types here validate their
//! values once so the request layer never has to.

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use url::Url;

use crate::error::{ExplorerError, ExplorerResult};

/// Base URL of the public PulseChain explorer API
pub const DEFAULT_BASE_URL: &str = "https://api.scan.pulsechain.com/api/v2";

const DEFAULT_TIMEOUT_SECONDS: u64 = 60;
const MAX_TIMEOUT_SECONDS: u64 = 300;

/// A validated per-request timeout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTimeout(Duration);

impl RequestTimeout {
    /// Create a new `RequestTimeout`, ensuring it is within bounds
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is zero or longer than 300 seconds
    pub fn new(timeout: Duration) -> ExplorerResult<Self> {
        if timeout.is_zero() {
            return Err(ExplorerError::config("timeout must be greater than 0"));
        }
        if timeout > Duration::from_secs(MAX_TIMEOUT_SECONDS) {
            return Err(ExplorerError::config(format!(
                "timeout cannot exceed {MAX_TIMEOUT_SECONDS} seconds"
            )));
        }
        Ok(Self(timeout))
    }

    /// Get the timeout value
    pub fn value(&self) -> Duration {
        self.0
    }
}

impl Default for RequestTimeout {
    fn default() -> Self {
        Self(Duration::from_secs(DEFAULT_TIMEOUT_SECONDS))
    }
}

impl Serialize for RequestTimeout {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.0.as_secs())
    }
}

impl<'de> Deserialize<'de> for RequestTimeout {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let seconds = u64::deserialize(deserializer)?;
        Self::new(Duration::from_secs(seconds)).map_err(|e| de::Error::custom(e.to_string()))
    }
}

/// Configuration for the explorer client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL every route is appended to
    #[serde(deserialize_with = "deserialize_base_url")]
    pub base_url: Url,
    /// Per-request timeout, given in seconds when deserialized
    #[serde(default)]
    pub timeout: RequestTimeout,
    /// Value of the `User-Agent` header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a configuration for the given base URL with default settings
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed or is not http(s)
    pub fn new(base_url: &str) -> ExplorerResult<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            timeout: RequestTimeout::default(),
            user_agent: default_user_agent(),
        })
    }

    /// Replace the request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is out of bounds
    pub fn with_timeout(mut self, timeout: Duration) -> ExplorerResult<Self> {
        self.timeout = RequestTimeout::new(timeout)?;
        Ok(self)
    }

    /// Replace the `User-Agent` header value
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for ClientConfig {
    #[allow(clippy::missing_panics_doc)]
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout: RequestTimeout::default(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("explorer-client/{}", env!("CARGO_PKG_VERSION"))
}

fn parse_base_url(raw: &str) -> ExplorerResult<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ExplorerError::config(format!("invalid base URL '{raw}': {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ExplorerError::config(format!(
            "base URL must use http or https, got '{}'",
            url.scheme()
        )));
    }
    Ok(url)
}

fn deserialize_base_url<'de, D>(deserializer: D) -> Result<Url, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_base_url(&raw).map_err(|e| de::Error::custom(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_pulsechain() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout.value(), Duration::from_secs(60));
        assert!(config.user_agent.starts_with("explorer-client/"));
    }

    #[test]
    fn rejects_invalid_base_urls() {
        assert!(matches!(
            ClientConfig::new("not a url"),
            Err(ExplorerError::Config { .. })
        ));
        assert!(matches!(
            ClientConfig::new("ftp://example.com/api"),
            Err(ExplorerError::Config { .. })
        ));
    }

    #[test]
    fn timeout_bounds() {
        assert!(RequestTimeout::new(Duration::ZERO).is_err());
        assert!(RequestTimeout::new(Duration::from_secs(301)).is_err());
        assert!(RequestTimeout::new(Duration::from_millis(250)).is_ok());
        assert!(RequestTimeout::new(Duration::from_secs(300)).is_ok());
    }

    #[test]
    fn builder_methods() {
        let config = ClientConfig::new("http://localhost:4000/api/v2")
            .unwrap()
            .with_timeout(Duration::from_secs(5))
            .unwrap()
            .with_user_agent("indexer/1.0");
        assert_eq!(config.timeout.value(), Duration::from_secs(5));
        assert_eq!(config.user_agent, "indexer/1.0");
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url": "https://explorer.example/api/v2", "timeout": 10}"#)
                .unwrap();
        assert_eq!(config.base_url.as_str(), "https://explorer.example/api/v2");
        assert_eq!(config.timeout.value(), Duration::from_secs(10));
        assert!(config.user_agent.starts_with("explorer-client/"));

        let zero: Result<ClientConfig, _> =
            serde_json::from_str(r#"{"base_url": "https://explorer.example/api/v2", "timeout": 0}"#);
        assert!(zero.is_err());
    }
}
