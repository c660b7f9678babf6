// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.

use std::path::{Path, PathBuf};

use alloy::primitives::{
    utils::{format_units, UnitsError},
    U256,
};
use color::Color;

pub mod color;

/// Pretty-prints an amount of gas based on how expensive the deployment is.
pub fn format_gas(gas: u128) -> String {
    let text = format!("{gas} gas");
    if gas <= 3_000_000 {
        text.mint()
    } else if gas <= 7_000_000 {
        text.yellow()
    } else {
        text.pink()
    }
}

/// Pretty-prints the total cost of `gas` at `gas_price` wei, in ether.
pub fn format_cost(gas: u64, gas_price: u128) -> Result<String, UnitsError> {
    let total = U256::from(gas_price) * U256::from(gas);
    let eth = format_units(total, "ether")?;
    Ok(format!("{eth} ETH"))
}

/// Decodes a hex string with an optional `0x` prefix.
pub fn decode0x(text: impl AsRef<str>) -> Result<Vec<u8>, hex::FromHexError> {
    let text = text.as_ref().trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(text)
}

/// Resolve `path` against the current working directory.
///
/// Nothing is required to exist yet, so this does not canonicalize.
pub fn absolute_path(path: impl AsRef<Path>) -> std::io::Result<PathBuf> {
    let path = path.as_ref();
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_with_and_without_prefix() {
        assert_eq!(decode0x("0x6080").unwrap(), vec![0x60, 0x80]);
        assert_eq!(decode0x(" 6080\n").unwrap(), vec![0x60, 0x80]);
        assert!(decode0x("0xzz").is_err());
    }

    #[test]
    fn cost_in_ether() {
        let cost = format_cost(21_000, 1_000_000_000).unwrap();
        assert!(cost.starts_with("0.000021"));
        assert!(cost.ends_with(" ETH"));
    }

    #[test]
    fn cost_does_not_wrap() {
        // u128::MAX wei is about 3.4e20 ETH; a million times that is still printed in full.
        let cost = format_cost(1_000_000, u128::MAX).unwrap();
        assert_eq!(cost, "340282366920938463463374607.431768211455000000 ETH");
    }

    #[test]
    fn absolute_paths_are_untouched() {
        let root = std::env::temp_dir();
        assert_eq!(absolute_path(&root).unwrap(), root);
        assert!(absolute_path("../").unwrap().is_absolute());
    }
}
