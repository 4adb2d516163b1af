// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Filter vocabularies accepted by the explorer endpoints
//!
//! Every filter the explorer understands is a closed set of wire strings. Each
//! set is modelled as an enum whose [`as_str`](BlockType::as_str) returns the
//! exact spelling the API expects, so callers can build filters without typos
//! and the request layer can still accept plain strings.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A string that is not part of a filter vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid {filter}")]
pub struct UnknownFilterValue {
    /// Name of the filter that rejected the value
    pub filter: &'static str,
    /// The rejected value
    pub value: String,
}

macro_rules! filter_vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident as $filter:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Returns the wire spelling of this value
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }

            /// Returns every value of this vocabulary in declaration order
            pub const fn all() -> &'static [Self] {
                &[$( Self::$variant, )+]
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl FromStr for $name {
            type Err = UnknownFilterValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok(Self::$variant), )+
                    other => Err(UnknownFilterValue {
                        filter: $filter,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

filter_vocabulary! {
    /// Kind of block returned by the blocks listing
    BlockType as "block type" {
        /// Canonical block
        Block => "block",
        /// Uncle block
        Uncle => "uncle",
        /// Block dropped by a reorganisation
        Reorg => "reorg",
    }
}

filter_vocabulary! {
    /// Transaction category used by the transactions listing
    TransactionType as "transaction type" {
        /// Token transfer
        TokenTransfer => "token_transfer",
        /// Contract deployment
        ContractCreation => "contract_creation",
        /// Contract call
        ContractCall => "contract_call",
        /// Native coin transfer
        CoinTransfer => "coin_transfer",
        /// Token deployment
        TokenCreation => "token_creation",
    }
}

filter_vocabulary! {
    /// Inclusion status of a transaction
    TransactionStatus as "transaction status" {
        /// Still in the mempool
        Pending => "pending",
        /// Included in a block
        Validated => "validated",
    }
}

filter_vocabulary! {
    /// Direction of a transaction relative to an address
    AddressTransactionFilter as "address transaction filter" {
        /// Transactions sent to the address
        To => "to",
        /// Transactions sent from the address
        From => "from",
    }
}

filter_vocabulary! {
    /// Decoded method name used by the transactions listing
    MethodFilter as "method" {
        /// `approve`
        Approve => "approve",
        /// `transfer`
        Transfer => "transfer",
        /// `multicall`
        Multicall => "multicall",
        /// `mint`
        Mint => "mint",
        /// `commit`
        Commit => "commit",
    }
}

filter_vocabulary! {
    /// Token standard
    TokenType as "token type" {
        /// ERC-20 fungible token
        Erc20 => "ERC-20",
        /// ERC-721 non-fungible token
        Erc721 => "ERC-721",
        /// ERC-1155 multi-token
        Erc1155 => "ERC-1155",
    }
}

filter_vocabulary! {
    /// Source language of a verified smart contract
    ContractLanguage as "contract language" {
        /// Vyper
        Vyper => "vyper",
        /// Solidity
        Solidity => "solidity",
        /// Yul
        Yul => "yul",
    }
}
