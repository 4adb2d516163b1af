// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Response envelopes
//!
//! The explorer replies with a mix of shapes: `{items, next_page_params}`
//! pages, bare records and bare arrays. Every client method returns one of the
//! two envelopes defined here so callers only ever deal with a list of records
//! and, for paginated routes, a cursor.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ExplorerError, ExplorerResult};

/// A single opaque record returned by the explorer
pub type Item = Map<String, Value>;

/// Opaque cursor fields returned by a paginated route
pub type PageParams = Map<String, Value>;

/// A page of items together with the cursor for the following page
pub type Page = (BaseResponse, Option<PageParams>);

/// A list of records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseResponse {
    /// Records in the order the explorer returned them
    pub items: Vec<Item>,
}

/// A list of records from a paginated route
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse {
    /// Records in the order the explorer returned them
    pub items: Vec<Item>,
    /// Cursor to pass back for the next page, `None` on the last page
    pub next_page_params: Option<PageParams>,
}

impl BaseResponse {
    /// Create a response holding a single record
    pub fn single(item: Item) -> Self {
        Self { items: vec![item] }
    }

    /// Build a response from a JSON array of objects
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not an array or an element is not an object
    pub fn from_value(value: Value) -> ExplorerResult<Self> {
        let Value::Array(values) = value else {
            return Err(ExplorerError::invalid_response(format!(
                "expected a list of records, got {}",
                type_name(&value)
            )));
        };

        let items = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| match value {
                Value::Object(item) => Ok(item),
                other => Err(ExplorerError::invalid_response(format!(
                    "item {index} is {}, expected a record",
                    type_name(&other)
                ))),
            })
            .collect::<ExplorerResult<Vec<_>>>()?;

        Ok(Self { items })
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no records
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl PaginatedResponse {
    /// Create a paginated response
    pub fn new(items: Vec<Item>, next_page_params: Option<PageParams>) -> Self {
        Self {
            items,
            next_page_params,
        }
    }

    /// Whether the explorer reported another page
    pub fn has_next_page(&self) -> bool {
        self.next_page_params.is_some()
    }
}

impl From<Page> for PaginatedResponse {
    fn from((base, next_page_params): Page) -> Self {
        Self::new(base.items, next_page_params)
    }
}

/// Parse a `next_page_params` value; `null` means there is no next page
pub(crate) fn parse_cursor(value: Option<Value>) -> ExplorerResult<Option<PageParams>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(cursor)) => Ok(Some(cursor)),
        Some(other) => Err(ExplorerError::invalid_response(format!(
            "next_page_params is {}, expected a record or null",
            type_name(&other)
        ))),
    }
}

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a record",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn from_value_accepts_list_of_records() {
        let response = BaseResponse::from_value(json!([{"a": 1}, {"b": "two"}])).unwrap();
        assert_eq!(response.len(), 2);
        assert_eq!(response.items[0]["a"], json!(1));
        assert_eq!(response.items[1]["b"], json!("two"));
    }

    #[test]
    fn from_value_rejects_non_records() {
        let error = BaseResponse::from_value(json!([{"a": 1}, 2])).unwrap_err();
        assert!(error.to_string().contains("item 1 is a number"));

        let error = BaseResponse::from_value(json!({"a": 1})).unwrap_err();
        assert!(matches!(error, ExplorerError::InvalidResponse { .. }));
    }

    #[test]
    fn cursor_parsing() {
        assert_eq!(parse_cursor(None).unwrap(), None);
        assert_eq!(parse_cursor(Some(Value::Null)).unwrap(), None);

        let cursor = parse_cursor(Some(json!({"block_number": 100})))
            .unwrap()
            .unwrap();
        assert_eq!(cursor["block_number"], json!(100));

        assert!(parse_cursor(Some(json!("next"))).is_err());
    }

    #[test]
    fn paginated_serializes_null_cursor() {
        let page = PaginatedResponse::new(vec![], None);
        assert!(!page.has_next_page());
        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            json!({"items": [], "next_page_params": null})
        );
    }
}
