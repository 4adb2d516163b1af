// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Verified smart contract endpoints

use alloy_primitives::Address;
use explorer_core::{
    BaseResponse, ExplorerResult, PageParams, PaginatedResponse, QueryParams, RequestHandler,
    SubpathClient, paginate, validators::validate_contract_filters,
};

/// Kind of contract methods to list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MethodKind {
    Read,
    ReadProxy,
    Write,
    WriteProxy,
}

impl MethodKind {
    const fn route(self) -> &'static str {
        match self {
            Self::Read => "methods-read",
            Self::ReadProxy => "methods-read-proxy",
            Self::Write => "methods-write",
            Self::WriteProxy => "methods-write-proxy",
        }
    }
}

/// Client for the `smart-contracts` routes
#[derive(Debug, Clone)]
pub struct SmartContractsClient {
    subpath: SubpathClient,
}

impl SmartContractsClient {
    /// Path prefix of every route of this client
    pub const SUBPATH: &'static str = "smart-contracts";

    /// Create a client sharing the given request handler
    pub fn new(request_handler: RequestHandler) -> Self {
        Self {
            subpath: SubpathClient::new(request_handler, Self::SUBPATH),
        }
    }

    /// Verified contracts matching `query`
    ///
    /// `contract_filters` entries must be `vyper`, `solidity` or `yul`.
    pub async fn get_smart_contracts(
        &self,
        query: &str,
        contract_filters: &[&str],
        next_page_params: Option<&PageParams>,
    ) -> ExplorerResult<PaginatedResponse> {
        paginate(next_page_params, |mut params| async move {
            params.insert("q", query);
            if !contract_filters.is_empty() {
                params.insert("filter", validate_contract_filters(contract_filters)?);
            }
            self.subpath.get_page("", &params).await
        })
        .await
    }

    /// Source, ABI and compiler settings of a verified contract
    pub async fn get_info(&self, address: Address) -> ExplorerResult<BaseResponse> {
        self.subpath
            .get_record(&format!("{address:#x}"), &QueryParams::new())
            .await
    }

    /// Counters of verified contracts
    pub async fn get_counters(&self) -> ExplorerResult<BaseResponse> {
        self.subpath
            .get_record("counters", &QueryParams::new())
            .await
    }

    /// Read methods of a contract, evaluated as `from_addr` when given
    pub async fn get_read_methods(
        &self,
        address: Address,
        from_addr: Option<Address>,
        is_custom_abi: bool,
    ) -> ExplorerResult<BaseResponse> {
        self.get_methods(address, MethodKind::Read, from_addr, is_custom_abi)
            .await
    }

    /// Read methods of the implementation behind a proxy contract
    pub async fn get_read_methods_proxy(
        &self,
        address: Address,
        from_addr: Option<Address>,
        is_custom_abi: bool,
    ) -> ExplorerResult<BaseResponse> {
        self.get_methods(address, MethodKind::ReadProxy, from_addr, is_custom_abi)
            .await
    }

    /// Write methods of a contract
    pub async fn get_write_methods(
        &self,
        address: Address,
        from_addr: Option<Address>,
        is_custom_abi: bool,
    ) -> ExplorerResult<BaseResponse> {
        self.get_methods(address, MethodKind::Write, from_addr, is_custom_abi)
            .await
    }

    /// Write methods of the implementation behind a proxy contract
    pub async fn get_write_methods_proxy(
        &self,
        address: Address,
        from_addr: Option<Address>,
        is_custom_abi: bool,
    ) -> ExplorerResult<BaseResponse> {
        self.get_methods(address, MethodKind::WriteProxy, from_addr, is_custom_abi)
            .await
    }

    async fn get_methods(
        &self,
        address: Address,
        kind: MethodKind,
        from_addr: Option<Address>,
        is_custom_abi: bool,
    ) -> ExplorerResult<BaseResponse> {
        let mut params = QueryParams::new().with("is_custom_abi", is_custom_abi.to_string());
        if let Some(from_addr) = from_addr {
            params.insert("from", format!("{from_addr:#x}"));
        }
        self.subpath
            .get_items(&format!("{address:#x}/{}", kind.route()), &params)
            .await
    }
}
