// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Token endpoints
//!
//! Token search, per-token metadata, transfers, holders, counters and NFT
//! instances.

use alloy_primitives::Address;
use explorer_core::{
    BaseResponse, ExplorerResult, PageParams, PaginatedResponse, QueryParams, RequestHandler,
    SubpathClient, paginate, validators::validate_token_type,
};

/// Client for the `tokens` routes
#[derive(Debug, Clone)]
pub struct TokensClient {
    subpath: SubpathClient,
}

impl TokensClient {
    /// Path prefix of every route of this client
    pub const SUBPATH: &'static str = "tokens";

    /// Create a client sharing the given request handler
    pub fn new(request_handler: RequestHandler) -> Self {
        Self {
            subpath: SubpathClient::new(request_handler, Self::SUBPATH),
        }
    }

    /// Tokens whose name matches `name_query`
    ///
    /// `token_type` entries must be `ERC-20`, `ERC-721` or `ERC-1155`.
    pub async fn get_tokens(
        &self,
        name_query: &str,
        token_type: &[&str],
        next_page_params: Option<&PageParams>,
    ) -> ExplorerResult<PaginatedResponse> {
        paginate(next_page_params, |mut params| async move {
            params.insert("q", name_query);
            if !token_type.is_empty() {
                params.insert("type", validate_token_type(token_type)?);
            }
            self.subpath.get_page("", &params).await
        })
        .await
    }

    /// Metadata of a token contract
    pub async fn get_info(&self, address: Address) -> ExplorerResult<BaseResponse> {
        self.subpath
            .get_record(&format!("{address:#x}"), &QueryParams::new())
            .await
    }

    /// Transfers of a token
    pub async fn get_transfers(
        &self,
        address: Address,
        next_page_params: Option<&PageParams>,
    ) -> ExplorerResult<PaginatedResponse> {
        self.token_page(address, "transfers", next_page_params).await
    }

    /// Holders of a token, largest balance first
    pub async fn get_holders(
        &self,
        address: Address,
        next_page_params: Option<&PageParams>,
    ) -> ExplorerResult<PaginatedResponse> {
        self.token_page(address, "holders", next_page_params).await
    }

    /// Holder and transfer counters of a token
    pub async fn get_counters(&self, address: Address) -> ExplorerResult<BaseResponse> {
        self.subpath
            .get_record(&format!("{address:#x}/counters"), &QueryParams::new())
            .await
    }

    /// Instances of an NFT collection
    pub async fn get_nft_instances(
        &self,
        address: Address,
        next_page_params: Option<&PageParams>,
    ) -> ExplorerResult<PaginatedResponse> {
        self.token_page(address, "instances", next_page_params).await
    }

    async fn token_page(
        &self,
        address: Address,
        endpoint: &str,
        next_page_params: Option<&PageParams>,
    ) -> ExplorerResult<PaginatedResponse> {
        paginate(next_page_params, |params| async move {
            self.subpath
                .get_page(&format!("{address:#x}/{endpoint}"), &params)
                .await
        })
        .await
    }
}
