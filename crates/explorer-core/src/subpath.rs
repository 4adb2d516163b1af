// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Requests scoped to a resource group of the explorer API

use serde_json::{Map, Value};
use tracing::debug;

use crate::{
    error::{ExplorerError, ExplorerResult},
    models::{BaseResponse, Page, parse_cursor, type_name},
    query::QueryParams,
    request::RequestHandler,
};

/// A [`RequestHandler`] bound to a fixed path prefix such as `addresses`
///
/// Responses are normalized to a JSON object: a bare array becomes
/// `{"items": [...]}`, so every route can be read through `items`.
#[derive(Debug, Clone)]
pub struct SubpathClient {
    request_handler: RequestHandler,
    subpath: String,
}

impl SubpathClient {
    /// Create a client for the given subpath
    pub fn new(request_handler: RequestHandler, subpath: impl Into<String>) -> Self {
        Self {
            request_handler,
            subpath: subpath.into(),
        }
    }

    /// GET `subpath/path` (or `subpath` itself when `path` is empty)
    ///
    /// # Errors
    ///
    /// Returns any error from the request handler, or an invalid response error
    /// if the body is neither an object nor an array
    pub async fn get(&self, path: &str, params: &QueryParams) -> ExplorerResult<Map<String, Value>> {
        let full_path = self.full_path(path);
        let value = self.request_handler.get(&full_path, params).await?;
        normalize(value, &full_path)
    }

    /// GET a route whose records live under `items`
    pub async fn get_items(&self, path: &str, params: &QueryParams) -> ExplorerResult<BaseResponse> {
        let mut envelope = self.get(path, params).await?;
        let items = take_items(&mut envelope, &self.full_path(path))?;
        debug!(subpath = %self.subpath, path, count = items.len(), "received items");
        Ok(items)
    }

    /// GET a route that returns a single record
    pub async fn get_record(&self, path: &str, params: &QueryParams) -> ExplorerResult<BaseResponse> {
        let record = self.get(path, params).await?;
        Ok(BaseResponse::single(record))
    }

    /// GET one page of a paginated route
    pub async fn get_page(&self, path: &str, params: &QueryParams) -> ExplorerResult<Page> {
        let full_path = self.full_path(path);
        let mut envelope = self.get(path, params).await?;
        let items = take_items(&mut envelope, &full_path)?;
        let next_page_params = parse_cursor(envelope.remove("next_page_params"))?;
        debug!(
            subpath = %self.subpath,
            path,
            count = items.len(),
            has_next_page = next_page_params.is_some(),
            "received page"
        );
        Ok((items, next_page_params))
    }

    fn full_path(&self, path: &str) -> String {
        if path.is_empty() {
            self.subpath.clone()
        } else {
            format!("{}/{}", self.subpath, path)
        }
    }
}

fn normalize(value: Value, path: &str) -> ExplorerResult<Map<String, Value>> {
    match value {
        Value::Object(envelope) => Ok(envelope),
        Value::Array(items) => {
            let mut envelope = Map::new();
            envelope.insert("items".to_string(), Value::Array(items));
            Ok(envelope)
        }
        other => Err(ExplorerError::invalid_response(format!(
            "{path} returned {}, expected a record or a list",
            type_name(&other)
        ))),
    }
}

fn take_items(envelope: &mut Map<String, Value>, path: &str) -> ExplorerResult<BaseResponse> {
    let items = envelope.remove("items").ok_or_else(|| {
        ExplorerError::invalid_response(format!("{path} response has no 'items' field"))
    })?;
    BaseResponse::from_value(items)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    use super::*;
    use crate::config::ClientConfig;

    async fn client_for(server: &MockServer, subpath: &str) -> SubpathClient {
        let config = ClientConfig::new(&server.uri())
            .unwrap()
            .with_timeout(Duration::from_secs(5))
            .unwrap();
        SubpathClient::new(RequestHandler::new(&config).unwrap(), subpath)
    }

    #[test]
    fn bare_list_is_wrapped() {
        let envelope = normalize(json!([{"a": 1}]), "tokens").unwrap();
        assert_eq!(Value::Object(envelope), json!({"items": [{"a": 1}]}));
    }

    #[test]
    fn objects_pass_through() {
        let envelope = normalize(json!({"hash": "0x1"}), "blocks/1").unwrap();
        assert_eq!(Value::Object(envelope), json!({"hash": "0x1"}));
    }

    #[test]
    fn scalars_are_rejected() {
        let error = normalize(json!("ok"), "stats").unwrap_err();
        assert!(error.to_string().contains("stats returned a string"));
    }

    #[tokio::test]
    async fn empty_path_targets_subpath_root() {
        let server = MockServer::start().await;
        let client = client_for(&server, "stats").await;

        Mock::given(method("GET"))
            .and(path("/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total_blocks": "1"})))
            .expect(1)
            .mount(&server)
            .await;

        let record = client.get_record("", &QueryParams::new()).await.unwrap();
        assert_eq!(record.items, vec![json!({"total_blocks": "1"}).as_object().unwrap().clone()]);
    }

    #[tokio::test]
    async fn page_extraction() {
        let server = MockServer::start().await;
        let client = client_for(&server, "blocks").await;

        Mock::given(method("GET"))
            .and(path("/blocks/100/transactions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{"hash": "0x1"}],
                "next_page_params": {"block_number": 100, "index": 5}
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/blocks/100/withdrawals"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [],
                "next_page_params": null
            })))
            .mount(&server)
            .await;

        let (items, cursor) = client
            .get_page("100/transactions", &QueryParams::new())
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(cursor.unwrap()["index"], json!(5));

        let (items, cursor) = client
            .get_page("100/withdrawals", &QueryParams::new())
            .await
            .unwrap();
        assert!(items.is_empty());
        assert!(cursor.is_none());
    }

    #[tokio::test]
    async fn missing_items_is_invalid_response() {
        let server = MockServer::start().await;
        let client = client_for(&server, "addresses").await;

        Mock::given(method("GET"))
            .and(path("/addresses"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 0})))
            .mount(&server)
            .await;

        let error = client.get_items("", &QueryParams::new()).await.unwrap_err();
        assert!(error.to_string().contains("addresses response has no 'items' field"));
    }
}
