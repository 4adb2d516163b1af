// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Top-level explorer client

use explorer_core::{
    BaseResponse, ClientConfig, ExplorerResult, PageParams, PaginatedResponse, QueryParams,
    RequestHandler, SubpathClient, paginate,
};
use tracing::info;

use crate::{
    AddressesClient, BlocksClient, SearchClient, SmartContractsClient, StatsClient, TokensClient,
    TransactionsClient,
};

/// Entry point to every explorer endpoint
///
/// All resource clients share one [`RequestHandler`] and therefore one
/// connection pool. Cloning the client is cheap.
#[derive(Debug, Clone)]
pub struct Client {
    request_handler: RequestHandler,
    stats: StatsClient,
    addresses: AddressesClient,
    transactions: TransactionsClient,
    tokens: TokensClient,
    blocks: BlocksClient,
    search: SearchClient,
    smart_contracts: SmartContractsClient,
    withdrawals: SubpathClient,
    config_routes: SubpathClient,
}

impl Client {
    /// Create a client for the public PulseChain explorer
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> ExplorerResult<Self> {
        Self::with_config(&ClientConfig::default())
    }

    /// Create a client for an explorer at `base_url` with default settings
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be created
    pub fn with_base_url(base_url: &str) -> ExplorerResult<Self> {
        Self::with_config(&ClientConfig::new(base_url)?)
    }

    /// Create a client from a configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created
    pub fn with_config(config: &ClientConfig) -> ExplorerResult<Self> {
        let request_handler = RequestHandler::new(config)?;
        info!(base_url = %config.base_url, "created explorer client");

        Ok(Self {
            stats: StatsClient::new(request_handler.clone()),
            addresses: AddressesClient::new(request_handler.clone()),
            transactions: TransactionsClient::new(request_handler.clone()),
            tokens: TokensClient::new(request_handler.clone()),
            blocks: BlocksClient::new(request_handler.clone()),
            search: SearchClient::new(request_handler.clone()),
            smart_contracts: SmartContractsClient::new(request_handler.clone()),
            withdrawals: SubpathClient::new(request_handler.clone(), "withdrawals"),
            config_routes: SubpathClient::new(request_handler.clone(), "config"),
            request_handler,
        })
    }

    /// The shared request handler
    pub fn request_handler(&self) -> &RequestHandler {
        &self.request_handler
    }

    /// Network statistics
    pub fn stats(&self) -> &StatsClient {
        &self.stats
    }

    /// Address endpoints
    pub fn addresses(&self) -> &AddressesClient {
        &self.addresses
    }

    /// Transaction endpoints
    pub fn transactions(&self) -> &TransactionsClient {
        &self.transactions
    }

    /// Token endpoints
    pub fn tokens(&self) -> &TokensClient {
        &self.tokens
    }

    /// Block endpoints
    pub fn blocks(&self) -> &BlocksClient {
        &self.blocks
    }

    /// Search endpoints
    pub fn search(&self) -> &SearchClient {
        &self.search
    }

    /// Verified smart contract endpoints
    pub fn smart_contracts(&self) -> &SmartContractsClient {
        &self.smart_contracts
    }

    /// Latest beacon chain withdrawals across the network
    pub async fn get_withdrawals(
        &self,
        next_page_params: Option<&PageParams>,
    ) -> ExplorerResult<PaginatedResponse> {
        paginate(next_page_params, |params| async move {
            self.withdrawals.get_page("", &params).await
        })
        .await
    }

    /// JSON-RPC endpoint advertised by the explorer
    pub async fn get_json_rpc_url(&self) -> ExplorerResult<BaseResponse> {
        self.config_routes
            .get_record("json-rpc-url", &QueryParams::new())
            .await
    }
}
