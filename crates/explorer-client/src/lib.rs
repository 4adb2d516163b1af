// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Typed client for the PulseChain block explorer API
//!
//! Every endpoint of the explorer's REST API is a method on one of the
//! resource clients, reachable from the top-level [`Client`]. Each method is a
//! single GET request: filter arguments are validated locally first, then the
//! reply is returned as a [`BaseResponse`] or, for paginated routes, a
//! [`PaginatedResponse`] whose `next_page_params` fetches the following page.
//!
//! # Resource Clients
//!
//! - [`AddressesClient`] - balances, counters, transactions and NFTs of an address
//! - [`BlocksClient`] - blocks and their transactions and withdrawals
//! - [`TransactionsClient`] - transactions, transfers, logs, traces and state changes
//! - [`TokensClient`] - token search, transfers, holders and NFT instances
//! - [`SmartContractsClient`] - verified contracts and their methods
//! - [`StatsClient`] - network counters and charts
//! - [`SearchClient`] - free text search
//!
//! # Example
//!
//! ```no_run
//! use explorer_client::Client;
//!
//! # async fn run() -> explorer_client::ExplorerResult<()> {
//! let client = Client::new()?;
//!
//! let first = client.blocks().get_blocks(&["block"], None).await?;
//! if let Some(cursor) = &first.next_page_params {
//!     let second = client.blocks().get_blocks(&["block"], Some(cursor)).await?;
//!     println!("{} more blocks", second.items.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod addresses;
pub mod blocks;
pub mod client;
pub mod search;
pub mod smart_contracts;
pub mod stats;
pub mod tokens;
pub mod transactions;

pub use addresses::AddressesClient;
pub use blocks::BlocksClient;
pub use client::Client;
pub use explorer_core::{
    BaseResponse, ClientConfig, ExplorerError, ExplorerResult, Item, PageParams,
    PaginatedResponse, RequestTimeout,
};
pub use explorer_types::*;
pub use search::SearchClient;
pub use smart_contracts::SmartContractsClient;
pub use stats::StatsClient;
pub use tokens::TokensClient;
pub use transactions::TransactionsClient;
