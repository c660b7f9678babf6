// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub use config::{print_config, print_recorded_address};
pub use migrate::{estimate_gas, migrate};

mod config;
mod migrate;
