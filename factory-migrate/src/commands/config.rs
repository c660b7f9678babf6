// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use factory_tools::ops;

use crate::{common_args::NetworkArgs, error::CliResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    network: NetworkArgs,
}

pub fn exec(args: Args) -> CliResult {
    let parameters = args.network.parameters()?;
    let migration = args.network.migration(&parameters)?;
    ops::print_config(&migration)?;
    Ok(())
}
