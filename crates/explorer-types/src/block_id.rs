// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Block identifiers for block routes

use std::{fmt, str::FromStr};

use alloy_primitives::B256;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A block addressed either by height or by hash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockId {
    /// Block height
    Number(u64),
    /// Block hash
    Hash(B256),
}

/// Error returned when a string is neither a block number nor a block hash
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is neither a block number nor a 32-byte block hash")]
pub struct ParseBlockIdError(pub String);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Hash(hash) => write!(f, "{hash:#x}"),
        }
    }
}

impl From<u64> for BlockId {
    fn from(number: u64) -> Self {
        Self::Number(number)
    }
}

impl From<B256> for BlockId {
    fn from(hash: B256) -> Self {
        Self::Hash(hash)
    }
}

impl FromStr for BlockId {
    type Err = ParseBlockIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.starts_with("0x") || trimmed.starts_with("0X") {
            return trimmed
                .parse::<B256>()
                .map(Self::Hash)
                .map_err(|_| ParseBlockIdError(s.to_string()));
        }
        trimmed
            .parse::<u64>()
            .map(Self::Number)
            .map_err(|_| ParseBlockIdError(s.to_string()))
    }
}
