// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Formatting helpers for values returned by the explorer

/// Decimals of the native PLS coin and most ERC-20 tokens
pub const DEFAULT_DECIMALS: usize = 18;

/// Insert a decimal point `decimal_places` characters from the right
///
/// The explorer reports balances as integer strings in the smallest unit.
/// Inputs shorter than `decimal_places` get the point prepended; zero places
/// leave the value unchanged.
pub fn add_decimal_sign(value: &str, decimal_places: usize) -> String {
    if decimal_places == 0 {
        return value.to_string();
    }

    let split = value
        .char_indices()
        .rev()
        .nth(decimal_places - 1)
        .map_or(0, |(index, _)| index);

    let (whole, fraction) = value.split_at(split);
    format!("{whole}.{fraction}")
}
