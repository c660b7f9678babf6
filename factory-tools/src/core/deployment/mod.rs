// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract deployment.
//!
//! A deployment either produces a [`DeployedContract`] or fails. Failures the chain reports
//! (rejected creation code, reverted or dropped transactions) become
//! [`DeploymentOutcome::Failed`]. Anything else, like a broken connection, is an error.
//!
//! Deploying is not idempotent: every successful call creates a new contract at a new address.

use alloy::{
    primitives::{Address, TxHash},
    providers::{Provider, WalletProvider},
};

use crate::{
    core::artifact::Artifact,
    utils::{color::DebugColor, format_gas},
};

pub use request::{DeploymentRequest, Fees};

mod request;

#[derive(Debug, Default, Clone)]
pub struct DeploymentConfig {
    pub max_fee_per_gas_wei: Option<u128>,
}

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),

    #[error("node rejected contract creation: {0}")]
    Rejected(String),
    #[error("tx failed to complete")]
    FailedToComplete,
    #[error("deploy tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("missing contract address in receipt")]
    MissingReceiptAddress,
    #[error("no accounts available to deploy from")]
    NoAccounts,
}

impl DeploymentError {
    /// Whether the chain refused the deployment, as opposed to the tool failing to talk to it.
    pub fn is_deployment_failure(&self) -> bool {
        matches!(
            self,
            Self::Rejected(_) | Self::FailedToComplete | Self::Reverted { .. } | Self::MissingReceiptAddress
        )
    }
}

/// Handle to a contract that made it on chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedContract {
    pub address: Address,
    pub tx_hash: TxHash,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeploymentOutcome {
    Deployed(DeployedContract),
    Failed { reason: String },
}

/// Something that can put an [`Artifact`] on chain.
///
/// This mirrors what a migration runner hands to each migration: a deployer and the list of
/// accounts it controls.
#[allow(async_fn_in_trait)]
pub trait ContractDeployer {
    /// Accounts available to the deployer, the deploying account first.
    async fn accounts(&self) -> Result<Vec<Address>, DeploymentError>;

    async fn deploy(&self, artifact: &Artifact) -> Result<DeploymentOutcome, DeploymentError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasEstimate {
    pub gas: u64,
    pub fees: Fees,
}

/// Deploys artifacts through an alloy provider with a wallet attached.
#[derive(Debug)]
pub struct ProviderDeployer<P> {
    provider: P,
    config: DeploymentConfig,
}

impl<P: Provider + WalletProvider> ProviderDeployer<P> {
    pub fn new(provider: P, config: DeploymentConfig) -> Self {
        Self { provider, config }
    }

    /// The provider deployments are sent through.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    fn request(&self, artifact: &Artifact) -> DeploymentRequest {
        let sender = self.provider.default_signer_address();
        debug!(@grey, "sender address: {}", sender.debug_lavender());
        DeploymentRequest::new(
            sender,
            artifact.bytecode().clone(),
            self.config.max_fee_per_gas_wei,
        )
    }

    /// Estimates the deployment without sending anything.
    pub async fn estimate(&self, artifact: &Artifact) -> Result<GasEstimate, DeploymentError> {
        let req = self.request(artifact);
        let gas = req.estimate_gas(&self.provider).await?;
        let fees = req.fees(&self.provider).await?;
        Ok(GasEstimate { gas, fees })
    }
}

impl<P: Provider + WalletProvider> ContractDeployer for ProviderDeployer<P> {
    async fn accounts(&self) -> Result<Vec<Address>, DeploymentError> {
        let accounts: Vec<_> = self.provider.signer_addresses().collect();
        if accounts.is_empty() {
            return Err(DeploymentError::NoAccounts);
        }
        Ok(accounts)
    }

    async fn deploy(&self, artifact: &Artifact) -> Result<DeploymentOutcome, DeploymentError> {
        debug!(@grey, "deploying {}", artifact.name());
        let receipt = match self.request(artifact).exec(&self.provider).await {
            Ok(receipt) => receipt,
            Err(err) if err.is_deployment_failure() => {
                return Ok(DeploymentOutcome::Failed {
                    reason: err.to_string(),
                })
            }
            Err(err) => return Err(err),
        };
        let Some(address) = receipt.contract_address else {
            return Ok(DeploymentOutcome::Failed {
                reason: DeploymentError::MissingReceiptAddress.to_string(),
            });
        };

        debug!(@grey, "gas used: {}", format_gas(receipt.gas_used.into()));
        debug!(@grey, "deployment tx hash: {}", receipt.transaction_hash.debug_lavender());
        Ok(DeploymentOutcome::Deployed(DeployedContract {
            address,
            tx_hash: receipt.transaction_hash,
        }))
    }
}
