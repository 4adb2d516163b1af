// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0
#![allow(missing_docs, dead_code)]

//! Shared fixtures for explorer client integration tests
//!
//! Provides a mock explorer server, a client pointed at it, and helpers to
//! build explorer-shaped responses and inspect the requests that were sent.

use std::time::Duration;

use alloy_primitives::{Address, B256};
use explorer_client::{Client, ClientConfig, PageParams};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Start a mock explorer and a client pointed at it
pub async fn setup() -> (MockServer, Client) {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server.uri(), TEST_TIMEOUT);
    (mock_server, client)
}

/// Create a client for the given base URL and timeout
pub fn create_test_client(base_url: &str, timeout: Duration) -> Client {
    let config = ClientConfig::new(base_url)
        .unwrap()
        .with_timeout(timeout)
        .unwrap();
    Client::with_config(&config).unwrap()
}

pub fn test_address() -> Address {
    Address::from([0x12; 20])
}

pub fn other_address() -> Address {
    Address::from([0xa9; 20])
}

pub fn test_hash() -> B256 {
    B256::repeat_byte(0x5c)
}

/// `0x`-prefixed lowercase hex, the form used in request paths
pub fn hex<T: std::fmt::LowerHex>(value: T) -> String {
    format!("{value:#x}")
}

/// A paginated explorer response
pub fn page_body(items: Value, next_page_params: Value) -> Value {
    json!({
        "items": items,
        "next_page_params": next_page_params
    })
}

/// A cursor as returned in `next_page_params`
pub fn cursor(value: Value) -> PageParams {
    match value {
        Value::Object(map) => map,
        other => panic!("cursor fixture must be an object, got {other}"),
    }
}

/// Mount a GET handler returning `body` with status 200
pub async fn mount_json(mock_server: &MockServer, route: impl Into<String>, body: Value) {
    Mock::given(method("GET"))
        .and(path(route.into()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(mock_server)
        .await;
}

/// Query strings of every request the server received, in order
pub async fn received_queries(mock_server: &MockServer) -> Vec<Option<String>> {
    mock_server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| request.url.query().map(str::to_string))
        .collect()
}

/// Decoded query pairs of the only request the server received
pub async fn single_request_query(mock_server: &MockServer) -> Vec<(String, String)> {
    let requests = mock_server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 1, "expected exactly one request");
    let mut pairs: Vec<(String, String)> = requests[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    pairs.sort();
    pairs
}

pub fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = expected
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    pairs.sort();
    pairs
}
