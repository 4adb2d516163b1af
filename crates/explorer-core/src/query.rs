// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Query string parameters

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::models::PageParams;

/// Query string parameters attached to a GET request
///
/// A key may carry several values, sent as repeated `key=value` pairs.
/// Inserting a key replaces every value it had.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, Vec<String>>);

impl QueryParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a parameter set from a pagination cursor
    ///
    /// Every cursor field is forwarded unchanged. Array fields become repeated
    /// keys and an empty array is left out; `None` yields an empty set.
    pub fn from_cursor(cursor: Option<&PageParams>) -> Self {
        let mut params = Self::new();
        if let Some(cursor) = cursor {
            for (key, value) in cursor {
                let values: Vec<String> = match value {
                    Value::Array(values) => values.iter().map(render_value).collect(),
                    other => vec![render_value(other)],
                };
                if !values.is_empty() {
                    params.0.insert(key.clone(), values);
                }
            }
        }
        params
    }

    /// Insert a parameter, returning the values it replaced
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<Vec<String>> {
        self.0.insert(key.into(), vec![value.into()])
    }

    /// Insert a parameter and return the set
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// First value of a parameter
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set has no parameters
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for QueryParams {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(
            self.0
                .iter()
                .flat_map(|(key, values)| values.iter().map(move |value| (key, value))),
        )
    }
}

/// Render a cursor value the way it travels in a query string
///
/// Numbers keep the exact text the explorer sent.
fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
