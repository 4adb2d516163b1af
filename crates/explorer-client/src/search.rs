// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Search endpoints

use explorer_core::{
    BaseResponse, ExplorerResult, PageParams, PaginatedResponse, QueryParams, RequestHandler,
    SubpathClient, paginate,
};

/// Client for the `search` routes
#[derive(Debug, Clone)]
pub struct SearchClient {
    subpath: SubpathClient,
}

impl SearchClient {
    /// Path prefix of every route of this client
    pub const SUBPATH: &'static str = "search";

    /// Create a client sharing the given request handler
    pub fn new(request_handler: RequestHandler) -> Self {
        Self {
            subpath: SubpathClient::new(request_handler, Self::SUBPATH),
        }
    }

    /// Addresses, tokens, blocks and transactions matching `query`
    pub async fn search(
        &self,
        query: &str,
        next_page_params: Option<&PageParams>,
    ) -> ExplorerResult<PaginatedResponse> {
        paginate(next_page_params, |mut params| async move {
            params.insert("q", query);
            self.subpath.get_page("", &params).await
        })
        .await
    }

    /// Where the explorer UI would redirect for `query`, if anywhere
    pub async fn check_redirect(&self, query: &str) -> ExplorerResult<BaseResponse> {
        self.subpath
            .get_record("check-redirect", &QueryParams::new().with("q", query))
            .await
    }
}
