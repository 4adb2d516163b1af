// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Address endpoints
//!
//! Balances, counters, transactions, transfers and NFT holdings of a single
//! address, plus the list of native coin holders.

use alloy_primitives::Address;
use explorer_core::{
    BaseResponse, ExplorerResult, PageParams, PaginatedResponse, QueryParams, RequestHandler,
    SubpathClient, paginate,
    validators::{validate_address_txn_filter, validate_token_type},
};
use tracing::debug;

/// Client for the `addresses` routes
#[derive(Debug, Clone)]
pub struct AddressesClient {
    subpath: SubpathClient,
}

impl AddressesClient {
    /// Path prefix of every route of this client
    pub const SUBPATH: &'static str = "addresses";

    /// Create a client sharing the given request handler
    pub fn new(request_handler: RequestHandler) -> Self {
        Self {
            subpath: SubpathClient::new(request_handler, Self::SUBPATH),
        }
    }

    /// Native coin holders, richest first
    pub async fn get_pls_holders_list(&self) -> ExplorerResult<BaseResponse> {
        self.subpath.get_items("", &QueryParams::new()).await
    }

    /// General information about an address
    pub async fn get_info(&self, address: Address) -> ExplorerResult<BaseResponse> {
        self.subpath
            .get_record(&format!("{address:#x}"), &QueryParams::new())
            .await
    }

    /// Transaction, transfer and gas usage counters of an address
    pub async fn get_counters(&self, address: Address) -> ExplorerResult<BaseResponse> {
        self.subpath
            .get_record(&format!("{address:#x}/counters"), &QueryParams::new())
            .await
    }

    /// Transactions of an address
    ///
    /// `txn_filter` restricts the direction and must be `to` or `from`.
    pub async fn get_transactions(
        &self,
        address: Address,
        txn_filter: Option<&str>,
        next_page_params: Option<&PageParams>,
    ) -> ExplorerResult<PaginatedResponse> {
        self.address_transactions(address, "transactions", txn_filter, next_page_params)
            .await
    }

    /// Token transfers of an address
    ///
    /// `token_type` entries must be `ERC-20`, `ERC-721` or `ERC-1155`;
    /// `txn_filter` must be `to` or `from`; `token` limits the transfers to a
    /// single token contract.
    pub async fn get_token_transfers(
        &self,
        address: Address,
        token_type: &[&str],
        txn_filter: Option<&str>,
        token: Option<Address>,
        next_page_params: Option<&PageParams>,
    ) -> ExplorerResult<PaginatedResponse> {
        paginate(next_page_params, |mut params| async move {
            if !token_type.is_empty() {
                params.insert("token_type", validate_token_type(token_type)?);
            }
            if let Some(txn_filter) = txn_filter {
                params.insert("filter", validate_address_txn_filter(txn_filter)?);
            }
            if let Some(token) = token {
                params.insert("token", format!("{token:#x}"));
            }
            self.subpath
                .get_page(&format!("{address:#x}/token-transfers"), &params)
                .await
        })
        .await
    }

    /// Internal transactions of an address
    pub async fn get_internal_transactions(
        &self,
        address: Address,
        txn_filter: Option<&str>,
        next_page_params: Option<&PageParams>,
    ) -> ExplorerResult<PaginatedResponse> {
        self.address_transactions(
            address,
            "internal-transactions",
            txn_filter,
            next_page_params,
        )
        .await
    }

    /// Event logs emitted by a contract address
    pub async fn get_logs(&self, address: Address) -> ExplorerResult<BaseResponse> {
        self.subpath
            .get_items(&format!("{address:#x}/logs"), &QueryParams::new())
            .await
    }

    /// Blocks validated by an address
    pub async fn get_blocks_validated(
        &self,
        address: Address,
        next_page_params: Option<&PageParams>,
    ) -> ExplorerResult<PaginatedResponse> {
        self.page(address, "blocks-validated", next_page_params).await
    }

    /// Every token balance of an address
    pub async fn get_token_balances(&self, address: Address) -> ExplorerResult<BaseResponse> {
        self.subpath
            .get_items(&format!("{address:#x}/token-balances"), &QueryParams::new())
            .await
    }

    /// Token balances of an address, optionally restricted by token standard
    pub async fn get_tokens(
        &self,
        address: Address,
        token_type: &[&str],
        next_page_params: Option<&PageParams>,
    ) -> ExplorerResult<PaginatedResponse> {
        paginate(next_page_params, |mut params| async move {
            if !token_type.is_empty() {
                params.insert("type", validate_token_type(token_type)?);
            }
            self.subpath
                .get_page(&format!("{address:#x}/tokens"), &params)
                .await
        })
        .await
    }

    /// Native coin balance changes of an address
    pub async fn get_coin_balance_history(
        &self,
        address: Address,
        next_page_params: Option<&PageParams>,
    ) -> ExplorerResult<PaginatedResponse> {
        self.page(address, "coin-balance-history", next_page_params)
            .await
    }

    /// Native coin balance of an address at the end of each day
    pub async fn get_coin_balance_history_by_day(
        &self,
        address: Address,
    ) -> ExplorerResult<BaseResponse> {
        self.subpath
            .get_items(
                &format!("{address:#x}/coin-balance-history-by-day"),
                &QueryParams::new(),
            )
            .await
    }

    /// Beacon chain withdrawals received by an address
    pub async fn get_withdrawals(
        &self,
        address: Address,
        next_page_params: Option<&PageParams>,
    ) -> ExplorerResult<PaginatedResponse> {
        self.page(address, "withdrawals", next_page_params).await
    }

    /// NFTs owned by an address
    pub async fn get_nfts(
        &self,
        address: Address,
        next_page_params: Option<&PageParams>,
    ) -> ExplorerResult<PaginatedResponse> {
        self.page(address, "nft", next_page_params).await
    }

    /// NFTs owned by an address, grouped by collection
    pub async fn get_nft_collections(
        &self,
        address: Address,
        next_page_params: Option<&PageParams>,
    ) -> ExplorerResult<PaginatedResponse> {
        self.page(address, "nft/collections", next_page_params)
            .await
    }

    async fn address_transactions(
        &self,
        address: Address,
        endpoint: &str,
        txn_filter: Option<&str>,
        next_page_params: Option<&PageParams>,
    ) -> ExplorerResult<PaginatedResponse> {
        paginate(next_page_params, |mut params| async move {
            if let Some(txn_filter) = txn_filter {
                params.insert("filter", validate_address_txn_filter(txn_filter)?);
            }
            debug!(%address, endpoint, "fetching address transactions");
            self.subpath
                .get_page(&format!("{address:#x}/{endpoint}"), &params)
                .await
        })
        .await
    }

    async fn page(
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
