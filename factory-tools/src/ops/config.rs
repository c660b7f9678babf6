// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::core::{env_file::get_env_value, migration::FactoryMigration, record::address_key};

/// Prints which parameters a network name resolves to.
pub fn print_config(migration: &FactoryMigration<'_>) -> eyre::Result<()> {
    println!("# network {} uses [{}]", migration.network(), migration.kind());
    print!("{}", migration.config().to_toml()?);
    Ok(())
}

/// Prints the address last recorded for `contract` on the migration's network.
pub fn print_recorded_address(
    migration: &FactoryMigration<'_>,
    contract: &str,
) -> eyre::Result<()> {
    let key = address_key(contract, migration.network());
    match get_env_value(migration.env_dir(), &key)? {
        Some(address) => println!("{address}"),
        None => eyre::bail!("no {key} recorded in {}", migration.env_dir().display()),
    }
    Ok(())
}
