// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::CliResult;

mod address;
mod config;
mod deploy;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Print the Factory address recorded for a network
    Address(address::Args),
    /// Print the parameters a network name resolves to
    Config(config::Args),
    /// Deploy the Factory contract and record its address
    #[clap(visible_alias = "migrate")]
    Deploy(deploy::Args),
}

pub async fn exec(cmd: Command) -> CliResult {
    match cmd {
        Command::Address(args) => address::exec(args),
        Command::Config(args) => config::exec(args),
        Command::Deploy(args) => deploy::exec(args).await,
    }
}
