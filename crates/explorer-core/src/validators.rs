// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Client-side validation of filter parameters
//!
//! Each validator checks its values against one of the closed vocabularies in
//! [`explorer_types`] and returns the string the explorer expects, or a
//! [`ExplorerError::BadParam`] naming the rule. Validation runs before any
//! request is built. Values may be given as strings or as the typed enums.

use std::str::FromStr;

use explorer_types::{
    AddressTransactionFilter, BlockType, ContractLanguage, MethodFilter, TokenType,
    TransactionStatus, TransactionType,
};

use crate::error::{ExplorerError, ExplorerResult};

const COMMA: &str = ",";
const PIPE: &str = " | ";

fn validate_list<T, S>(values: &[S], separator: &str, rule: &str) -> ExplorerResult<String>
where
    T: FromStr,
    S: AsRef<str>,
{
    values
        .iter()
        .map(|value| {
            let value = value.as_ref();
            value
                .parse::<T>()
                .map(|_| value)
                .map_err(|_| ExplorerError::bad_param(rule))
        })
        .collect::<ExplorerResult<Vec<_>>>()
        .map(|values| values.join(separator))
}

/// Validate block types (`block`, `uncle`, `reorg`), comma-joined
pub fn validate_block_type<S: AsRef<str>>(block_type: &[S]) -> ExplorerResult<String> {
    validate_list::<BlockType, _>(
        block_type,
        COMMA,
        "block_type must be one of 'block', 'uncle', or 'reorg'",
    )
}

/// Validate transaction types, comma-joined
pub fn validate_txn_type<S: AsRef<str>>(txn_type: &[S]) -> ExplorerResult<String> {
    validate_list::<TransactionType, _>(
        txn_type,
        COMMA,
        "txn_type must be one of 'token_transfer', 'contract_creation', 'contract_call', \
         'coin_transfer', or 'token_creation'",
    )
}

/// Validate transaction statuses (`pending`, `validated`), pipe-joined
pub fn validate_txn_filter<S: AsRef<str>>(txn_filter: &[S]) -> ExplorerResult<String> {
    validate_list::<TransactionStatus, _>(
        txn_filter,
        PIPE,
        "txn_filter must be either 'pending' or 'validated'",
    )
}

/// Validate the direction filter of an address listing (`to` or `from`)
pub fn validate_address_txn_filter(txn_filter: impl AsRef<str>) -> ExplorerResult<String> {
    let txn_filter = txn_filter.as_ref();
    txn_filter
        .parse::<AddressTransactionFilter>()
        .map(|filter| filter.as_str().to_string())
        .map_err(|_| ExplorerError::bad_param("txn_filter must be either 'to' or 'from'"))
}

/// Validate decoded method names, comma-joined
pub fn validate_method<S: AsRef<str>>(method: &[S]) -> ExplorerResult<String> {
    validate_list::<MethodFilter, _>(
        method,
        COMMA,
        "method must be either 'approve', 'transfer', 'multicall', 'mint', or 'commit'",
    )
}

/// Validate token standards (`ERC-20`, `ERC-721`, `ERC-1155`), comma-joined
pub fn validate_token_type<S: AsRef<str>>(token_type: &[S]) -> ExplorerResult<String> {
    validate_list::<TokenType, _>(
        token_type,
        COMMA,
        "token_type must be one of 'ERC-20', 'ERC-721', or 'ERC-1155'",
    )
}

/// Validate contract languages (`vyper`, `solidity`, `yul`), pipe-joined
pub fn validate_contract_filters<S: AsRef<str>>(contract_filters: &[S]) -> ExplorerResult<String> {
    validate_list::<ContractLanguage, _>(
        contract_filters,
        PIPE,
        "contract_filter must be one of 'vyper', 'solidity' or 'yul'",
    )
}
