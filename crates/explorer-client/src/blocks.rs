// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Block endpoints

use explorer_core::{
    BaseResponse, ExplorerResult, PageParams, PaginatedResponse, QueryParams, RequestHandler,
    SubpathClient, paginate, validators::validate_block_type,
};
use explorer_types::BlockId;

/// Client for the `blocks` routes
///
/// Blocks are addressed by [`BlockId`], so any route taking a block accepts
/// either a height or a hash.
#[derive(Debug, Clone)]
pub struct BlocksClient {
    subpath: SubpathClient,
}

impl BlocksClient {
    /// Path prefix of every route of this client
    pub const SUBPATH: &'static str = "blocks";

    /// Create a client sharing the given request handler
    pub fn new(request_handler: RequestHandler) -> Self {
        Self {
            subpath: SubpathClient::new(request_handler, Self::SUBPATH),
        }
    }

    /// Latest blocks, optionally restricted to `block`, `uncle` or `reorg`
    pub async fn get_blocks(
        &self,
        block_type: &[&str],
        next_page_params: Option<&PageParams>,
    ) -> ExplorerResult<PaginatedResponse> {
        paginate(next_page_params, |mut params| async move {
            if !block_type.is_empty() {
                params.insert("type", validate_block_type(block_type)?);
            }
            self.subpath.get_page("", &params).await
        })
        .await
    }

    /// Details of a single block
    pub async fn get_block_info(&self, block: impl Into<BlockId>) -> ExplorerResult<BaseResponse> {
        let block = block.into();
        self.subpath
            .get_record(&block.to_string(), &QueryParams::new())
            .await
    }

    /// Transactions included in a block
    pub async fn get_block_txns(
        &self,
        block: impl Into<BlockId>,
        next_page_params: Option<&PageParams>,
    ) -> ExplorerResult<PaginatedResponse> {
        self.block_page(block.into(), "transactions", next_page_params)
            .await
    }

    /// Beacon chain withdrawals processed in a block
    pub async fn get_block_withdrawals(
        &self,
        block: impl Into<BlockId>,
        next_page_params: Option<&PageParams>,
    ) -> ExplorerResult<PaginatedResponse> {
        self.block_page(block.into(), "withdrawals", next_page_params)
            .await
    }

    async fn block_page(
        &self,
        block: BlockId,
        endpoint: &str,
        next_page_params: Option<&PageParams>,
    ) -> ExplorerResult<PaginatedResponse> {
        paginate(next_page_params, |params| async move {
            self.subpath
                .get_page(&format!("{block}/{endpoint}"), &params)
                .await
        })
        .await
    }
}
