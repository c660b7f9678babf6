// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Recording deployment outcomes.
//!
//! A successful deployment is logged and its address written to the env file under
//! `<Contract>_ADDRESS<NETWORK>`, e.g. `Factory_ADDRESSMAINNET`. A failed one is only logged.

use std::path::Path;

use alloy::primitives::Address;

use crate::{
    core::{
        deployment::DeploymentOutcome,
        env_file::{EnvEntry, EnvFileError},
    },
    utils::color::DebugColor,
};

/// Env key the address of `contract` on `network` is stored under.
///
/// The network name is upper-cased as given, so `rinkeby` and `Rinkeby` share a key. Characters
/// an env key cannot hold become `_`: `rinkeby-fork` is stored as `..._ADDRESSRINKEBY_FORK`.
pub fn address_key(contract: &str, network: &str) -> String {
    let network: String = network
        .to_uppercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{contract}_ADDRESS{network}")
}

/// What the recorder did with an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordStatus {
    /// The address was written. `creator` is the account that deployed it, if known.
    Recorded {
        entry: EnvEntry,
        creator: Option<Address>,
    },
    Failed,
}

fn deployed_message(
    contract: &str,
    network: &str,
    address: Address,
    creator: Option<Address>,
) -> String {
    let creator = creator
        .map(|account| account.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    format!(
        "Deployed: {contract}\n    network: {network}\n    address: {address}\n    creator: {creator}"
    )
}

fn failed_message(contract: &str, reason: &str) -> String {
    format!("{contract} Deployment UNSUCCESSFUL: {reason}")
}

/// Logs `outcome` and, if the contract was deployed, writes its address under `env_dir`.
///
/// `creator` is the first account the runner provided. Env write failures are returned as-is.
pub fn record(
    contract: &str,
    network: &str,
    outcome: &DeploymentOutcome,
    creator: Option<Address>,
    env_dir: &Path,
) -> Result<RecordStatus, EnvFileError> {
    match outcome {
        DeploymentOutcome::Deployed(deployed) => {
            info!(@mint, "{}", deployed_message(contract, network, deployed.address, creator));

            let entry = EnvEntry::new(address_key(contract, network), deployed.address.to_string());
            entry.write(env_dir)?;
            debug!(@grey, "wrote {} to {}", entry.key.debug_lavender(), env_dir.display());
            Ok(RecordStatus::Recorded { entry, creator })
        }
        DeploymentOutcome::Failed { reason } => {
            warn!(@red, "{}", failed_message(contract, reason));
            Ok(RecordStatus::Failed)
        }
    }
}
