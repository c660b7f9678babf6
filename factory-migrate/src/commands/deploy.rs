// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use factory_tools::{
    core::{
        artifact::{Artifact, FACTORY_CONTRACT_NAME},
        deployment::DeploymentConfig,
    },
    ops,
};

use crate::{
    common_args::{AuthArgs, NetworkArgs, ProviderArgs},
    constants::DEFAULT_ARTIFACT_PATH,
    error::CliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Only perform gas estimation.
    #[arg(long)]
    estimate_gas: bool,
    /// Build artifact of the Factory contract.
    #[arg(long, default_value = DEFAULT_ARTIFACT_PATH)]
    artifact: PathBuf,

    #[command(flatten)]
    network: NetworkArgs,
    /// Wallet source to use.
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> CliResult {
    let parameters = args.network.parameters()?;
    let migration = args.network.migration(&parameters)?;
    let artifact = Artifact::load_contract(&args.artifact, FACTORY_CONTRACT_NAME)
        .map_err(factory_tools::Error::from)?;

    let config = DeploymentConfig {
        max_fee_per_gas_wei: args
            .auth
            .get_max_fee_per_gas_wei()?
            .or(migration.config().max_fee_per_gas_wei()),
    };
    let provider = args
        .provider
        .build_provider_with_wallet(migration.config(), &args.auth)
        .await?;

    if args.estimate_gas {
        ops::estimate_gas(&migration, &artifact, config, provider).await?;
    } else {
        // A failed deployment has already been reported and is not an error for the runner
        ops::migrate(&migration, &artifact, config, provider).await?;
    }
    Ok(())
}
