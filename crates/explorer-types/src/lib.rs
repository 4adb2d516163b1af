// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Shared types for the explorer API client
//!
//! This crate provides the closed filter vocabularies accepted by the explorer
//! endpoints and the block identifier used in block routes. It has no HTTP
//! dependencies so it can be shared by every layer of the workspace.

pub mod block_id;
pub mod filters;

pub use block_id::{BlockId, ParseBlockIdError};
pub use filters::{
    AddressTransactionFilter, BlockType, ContractLanguage, MethodFilter, TokenType,
    TransactionStatus, TransactionType, UnknownFilterValue,
};
