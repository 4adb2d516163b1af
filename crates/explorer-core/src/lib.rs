// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP transport and response envelopes for the explorer API
//!
//! This crate holds everything the resource clients share: the request
//! handler that talks to the explorer, the subpath abstraction, the response
//! envelopes, pagination and parameter validation.
//!
//! # Core Abstractions
//!
//! - **[`RequestHandler`]**: one GET per call, status codes mapped to [`ExplorerError`]
//! - **[`SubpathClient`]**: a request handler bound to a path prefix, bare lists normalized to `items`
//! - **[`BaseResponse`] / [`PaginatedResponse`]**: uniform envelopes returned by every endpoint
//! - **[`paginate`]**: seeds a request from a `next_page_params` cursor
//! - **[`validators`]**: client-side checks for filter parameters

pub mod config;
pub mod error;
pub mod models;
pub mod pagination;
pub mod query;
pub mod request;
pub mod subpath;
pub mod utils;
pub mod validators;

pub use config::{ClientConfig, DEFAULT_BASE_URL, RequestTimeout};
pub use error::{ExplorerError, ExplorerResult};
pub use models::{BaseResponse, Item, Page, PageParams, PaginatedResponse};
pub use pagination::paginate;
pub use query::QueryParams;
pub use request::RequestHandler;
pub use subpath::SubpathClient;
pub use utils::{DEFAULT_DECIMALS, add_decimal_sign};
