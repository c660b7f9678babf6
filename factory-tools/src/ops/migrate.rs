// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Run the Factory migration against a live node.

use alloy::{
    primitives::utils::format_units,
    providers::{Provider, WalletProvider},
};

use crate::{
    core::{
        artifact::Artifact,
        deployment::{ContractDeployer, DeploymentConfig, ProviderDeployer},
        env_file::env_file_path,
        migration::FactoryMigration,
        record::RecordStatus,
    },
    utils::{color::Color, format_cost, format_gas},
};

/// Deploys `artifact` through `provider` and records the outcome.
///
/// The connected chain must match the chain id pinned in the selected network parameters.
pub async fn migrate(
    migration: &FactoryMigration<'_>,
    artifact: &Artifact,
    config: DeploymentConfig,
    provider: impl Provider + WalletProvider,
) -> eyre::Result<RecordStatus> {
    let deployer = ProviderDeployer::new(provider, config);
    check_chain(migration, deployer.provider()).await?;

    let accounts = deployer.accounts().await?;
    let status = migration.run(artifact, &deployer, &accounts).await?;

    if let RecordStatus::Recorded { entry, .. } = &status {
        mintln!(
            "recorded {}={} in {}",
            entry.key,
            entry.value,
            env_file_path(migration.env_dir()).display()
        );
    }
    Ok(status)
}

/// Prints what deploying `artifact` would cost, without deploying it.
pub async fn estimate_gas(
    migration: &FactoryMigration<'_>,
    artifact: &Artifact,
    config: DeploymentConfig,
    provider: impl Provider + WalletProvider,
) -> eyre::Result<()> {
    let deployer = ProviderDeployer::new(provider, config);
    check_chain(migration, deployer.provider()).await?;

    let estimate = deployer.estimate(artifact).await?;

    greyln!("estimates for {} on {}", artifact.name(), migration.network());
    greyln!("deployment tx gas: {}", format_gas(estimate.gas.into()));
    greyln!(
        "max fee per gas: {} gwei",
        format_units(estimate.fees.max_fee_per_gas, "gwei")?.lavender()
    );
    greyln!(
        "max priority fee per gas: {} gwei",
        format_units(estimate.fees.max_priority_fee_per_gas, "gwei")?.lavender()
    );
    greyln!(
        "deployment tx max cost: {}",
        format_cost(estimate.gas, estimate.fees.max_fee_per_gas)?.lavender()
    );
    Ok(())
}

async fn check_chain(
    migration: &FactoryMigration<'_>,
    provider: &impl Provider,
) -> eyre::Result<()> {
    let chain_id = provider.get_chain_id().await?;
    debug!(@grey, "connected to chain {}", chain_id);
    migration
        .config()
        .check_chain_id(migration.network(), chain_id)?;
    Ok(())
}
