// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Transaction endpoints
//!
//! The transaction listing accepts three independent filters. Status values
//! are pipe-joined while types and methods are comma-joined, matching what the
//! explorer parses for each parameter.

use alloy_primitives::B256;
use explorer_core::{
    BaseResponse, ExplorerResult, PageParams, PaginatedResponse, QueryParams, RequestHandler,
    SubpathClient, paginate,
    validators::{validate_method, validate_txn_filter, validate_txn_type},
};

/// Client for the `transactions` routes
#[derive(Debug, Clone)]
pub struct TransactionsClient {
    subpath: SubpathClient,
}

impl TransactionsClient {
    /// Path prefix of every route of this client
    pub const SUBPATH: &'static str = "transactions";

    /// Create a client sharing the given request handler
    pub fn new(request_handler: RequestHandler) -> Self {
        Self {
            subpath: SubpathClient::new(request_handler, Self::SUBPATH),
        }
    }

    /// Latest transactions
    ///
    /// - `txn_filter`: `pending`, `validated`
    /// - `txn_type`: `token_transfer`, `contract_creation`, `contract_call`,
    ///   `coin_transfer`, `token_creation`
    /// - `method`: `approve`, `transfer`, `multicall`, `mint`, `commit`
    ///
    /// Empty slices apply no filter. Filters are validated before the request
    /// is sent.
    pub async fn get_transactions(
        &self,
        txn_filter: &[&str],
        txn_type: &[&str],
        method: &[&str],
        next_page_params: Option<&PageParams>,
    ) -> ExplorerResult<PaginatedResponse> {
        paginate(next_page_params, |mut params| async move {
            if !txn_filter.is_empty() {
                params.insert("filter", validate_txn_filter(txn_filter)?);
            }
            if !txn_type.is_empty() {
                params.insert("tx_type", validate_txn_type(txn_type)?);
            }
            if !method.is_empty() {
                params.insert("method", validate_method(method)?);
            }
            self.subpath.get_page("", &params).await
        })
        .await
    }

    /// Details of a single transaction
    pub async fn get_transaction_info(
        &self,
        transaction_hash: B256,
    ) -> ExplorerResult<BaseResponse> {
        self.subpath
            .get_record(&format!("{transaction_hash:#x}"), &QueryParams::new())
            .await
    }

    /// Token transfers emitted by a transaction
    pub async fn get_token_transfers(
        &self,
        transaction_hash: B256,
        next_page_params: Option<&PageParams>,
    ) -> ExplorerResult<PaginatedResponse> {
        self.transaction_page(transaction_hash, "token-transfers", next_page_params)
            .await
    }

    /// Internal calls made by a transaction
    pub async fn get_internal_transactions(
        &self,
        transaction_hash: B256,
        next_page_params: Option<&PageParams>,
    ) -> ExplorerResult<PaginatedResponse> {
        self.transaction_page(transaction_hash, "internal-transactions", next_page_params)
            .await
    }

    /// Event logs emitted by a transaction
    pub async fn get_logs(
        &self,
        transaction_hash: B256,
        next_page_params: Option<&PageParams>,
    ) -> ExplorerResult<PaginatedResponse> {
        self.transaction_page(transaction_hash, "logs", next_page_params)
            .await
    }

    /// Raw execution trace of a transaction, one item per call frame
    pub async fn get_raw_trace(&self, transaction_hash: B256) -> ExplorerResult<BaseResponse> {
        self.subpath
            .get_items(
                &format!("{transaction_hash:#x}/raw-trace"),
                &QueryParams::new(),
            )
            .await
    }

    /// Balance and storage changes caused by a transaction
    pub async fn get_state_changes(
        &self,
        transaction_hash: B256,
        next_page_params: Option<&PageParams>,
    ) -> ExplorerResult<PaginatedResponse> {
        self.transaction_page(transaction_hash, "state-changes", next_page_params)
            .await
    }

    async fn transaction_page(
        &self,
        transaction_hash: B256,
        endpoint: &str,
        next_page_params: Option<&PageParams>,
    ) -> ExplorerResult<PaginatedResponse> {
        paginate(next_page_params, |params| async move {
            self.subpath
                .get_page(&format!("{transaction_hash:#x}/{endpoint}"), &params)
                .await
        })
        .await
    }
}
