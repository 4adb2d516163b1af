// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Caller-driven pagination
//!
//! Paginated routes return a cursor (`next_page_params`) alongside each page.
//! The caller passes it back to fetch the following page; nothing here loops
//! over pages on its own.

use crate::{
    error::ExplorerResult,
    models::{Page, PageParams, PaginatedResponse},
    query::QueryParams,
};

/// Fetch one page of a paginated route
///
/// The query parameters handed to `fetch` are seeded from `next_page_params`
/// (empty when `None`); `fetch` adds its own filters on top and returns the
/// page it received. The result is wrapped as a [`PaginatedResponse`].
///
/// # Errors
///
/// Returns whatever error `fetch` returns
pub async fn paginate<F, Fut>(
    next_page_params: Option<&PageParams>,
    fetch: F,
) -> ExplorerResult<PaginatedResponse>
where
    F: FnOnce(QueryParams) -> Fut,
    Fut: Future<Output = ExplorerResult<Page>>,
{
    let params = QueryParams::from_cursor(next_page_params);
    let page = fetch(params).await?;
    Ok(PaginatedResponse::from(page))
}
