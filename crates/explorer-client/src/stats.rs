// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Network statistics endpoints

use explorer_core::{
    BaseResponse, ExplorerError, ExplorerResult, QueryParams, RequestHandler, SubpathClient,
};

/// Client for the `stats` routes
#[derive(Debug, Clone)]
pub struct StatsClient {
    subpath: SubpathClient,
}

impl StatsClient {
    /// Path prefix of every route of this client
    pub const SUBPATH: &'static str = "stats";

    /// Create a client sharing the given request handler
    pub fn new(request_handler: RequestHandler) -> Self {
        Self {
            subpath: SubpathClient::new(request_handler, Self::SUBPATH),
        }
    }

    /// Network-wide counters such as total blocks, addresses and transactions
    pub async fn get_stats(&self) -> ExplorerResult<BaseResponse> {
        self.subpath.get_record("", &QueryParams::new()).await
    }

    /// Daily transaction counts for the last 31 days, one item per day
    pub async fn get_transactions_chart(&self) -> ExplorerResult<BaseResponse> {
        let mut chart = self
            .subpath
            .get("charts/transactions", &QueryParams::new())
            .await?;
        let data = chart.remove("chart_data").ok_or_else(|| {
            ExplorerError::invalid_response(
                "stats/charts/transactions response has no 'chart_data' field",
            )
        })?;
        BaseResponse::from_value(data)
    }

    /// Market chart data (available supply and price history)
    pub async fn get_market_chart(&self) -> ExplorerResult<BaseResponse> {
        self.subpath
            .get_record("charts/market", &QueryParams::new())
            .await
    }
}
