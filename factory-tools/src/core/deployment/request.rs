// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The contract-creation transaction

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes},
    providers::Provider,
    rpc::types::{TransactionReceipt, TransactionRequest},
    transports::RpcError,
};

use super::DeploymentError;
use crate::utils::color::DebugColor;

/// EIP-1559 fees for one transaction, in wei.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fees {
    pub max_fee_per_gas: u128,
    pub max_priority_fee_per_gas: u128,
}

impl Fees {
    /// Replaces the max fee with `cap`, if any. The tip is lowered to fit under it.
    pub fn capped(self, cap: Option<u128>) -> Self {
        match cap {
            Some(cap) => Self {
                max_fee_per_gas: cap,
                max_priority_fee_per_gas: self.max_priority_fee_per_gas.min(cap),
            },
            None => self,
        }
    }
}

/// Creation transaction for an artifact's bytecode, sent from `sender`
#[derive(Debug)]
pub struct DeploymentRequest {
    tx: TransactionRequest,
    fee_cap: Option<u128>,
}

impl DeploymentRequest {
    pub fn new(sender: Address, bytecode: Bytes, fee_cap: Option<u128>) -> Self {
        let tx = TransactionRequest::default()
            .with_from(sender)
            .with_deploy_code(bytecode);
        Self { tx, fee_cap }
    }

    /// Gas the creation code needs.
    ///
    /// The node answering with an error, e.g. for a reverting constructor, means the contract
    /// cannot be created and is reported as [`DeploymentError::Rejected`].
    pub async fn estimate_gas(&self, provider: &impl Provider) -> Result<u64, DeploymentError> {
        match provider.estimate_gas(self.tx.clone()).await {
            Ok(gas) => Ok(gas),
            Err(RpcError::ErrorResp(payload)) => {
                Err(DeploymentError::Rejected(payload.message.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Fees from the node's fee history, with the max fee replaced by the configured cap.
    pub async fn fees(&self, provider: &impl Provider) -> Result<Fees, DeploymentError> {
        let estimate = provider.estimate_eip1559_fees().await?;
        let fees = Fees {
            max_fee_per_gas: estimate.max_fee_per_gas,
            max_priority_fee_per_gas: estimate.max_priority_fee_per_gas,
        }
        .capped(self.fee_cap);
        debug!(@grey, "fees: {}", fees.debug_lavender());
        Ok(fees)
    }

    /// Sends the transaction and waits for it to be mined.
    pub async fn exec(
        self,
        provider: &impl Provider,
    ) -> Result<TransactionReceipt, DeploymentError> {
        let gas = self.estimate_gas(provider).await?;
        let fees = self.fees(provider).await?;
        let tx = self
            .tx
            .with_gas_limit(gas)
            .with_max_fee_per_gas(fees.max_fee_per_gas)
            .with_max_priority_fee_per_gas(fees.max_priority_fee_per_gas);

        let pending = provider.send_transaction(tx).await?;
        let tx_hash = *pending.tx_hash();
        debug!(@grey, "sent deploy tx: {}", tx_hash.debug_lavender());

        let receipt = pending.get_receipt().await.map_err(|err| {
            debug!(@grey, "no receipt for {}: {}", tx_hash.debug_lavender(), err);
            DeploymentError::FailedToComplete
        })?;
        if receipt.status() {
            Ok(receipt)
        } else {
            Err(DeploymentError::Reverted { tx_hash })
        }
    }
}
