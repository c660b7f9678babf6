// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Per-network deployment parameters.
//!
//! The migration runner hands over a free-form network name. Only `rinkeby` and `mainnet` have
//! dedicated parameters; every other name, `development` included, falls back to the devnet
//! parameters. Matching is case-sensitive.

use std::{fmt, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::utils::color::Color;

/// Default endpoint of the public testnet slot (`goerli`, selected by `rinkeby`). Both of those
/// testnets are shut down, so the slot points at Sepolia until a parameters file says otherwise.
pub const DEFAULT_TESTNET_ENDPOINT: &str = "https://ethereum-sepolia-rpc.publicnode.com";
pub const DEFAULT_MAINNET_ENDPOINT: &str = "https://ethereum-rpc.publicnode.com";
pub const DEFAULT_DEVNET_ENDPOINT: &str = "http://localhost:8545";

const TESTNET_CHAIN_ID: u64 = 11_155_111;
const MAINNET_CHAIN_ID: u64 = 1;

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("failed to read migration parameters {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid migration parameters: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize network config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error(
        "network {} expects chain id {} but the endpoint reports {}",
        .network.red(),
        .expected.red(),
        .actual.red(),
    )]
    ChainIdMismatch {
        network: String,
        expected: u64,
        actual: u64,
    },
}

/// Which entry of [`MigrationParameters`] a network name resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkKind {
    Goerli,
    Mainnet,
    Devnet,
}

impl NetworkKind {
    /// Total over every network name: anything unrecognized is a devnet.
    pub fn from_network(network: &str) -> Self {
        match network {
            "rinkeby" => Self::Goerli,
            "mainnet" => Self::Mainnet,
            _ => Self::Devnet,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Goerli => "goerli",
            Self::Mainnet => "mainnet",
            Self::Devnet => "devnet",
        }
    }
}

impl fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct NetworkConfig {
    /// RPC endpoint of a node on this network.
    pub endpoint: String,
    /// Chain id the endpoint must report, if pinned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
    /// Fixed max fee per gas. The node's gas price is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas_gwei: Option<u64>,
}

impl NetworkConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            chain_id: None,
            max_fee_per_gas_gwei: None,
        }
    }

    pub fn max_fee_per_gas_wei(&self) -> Option<u128> {
        self.max_fee_per_gas_gwei
            .map(|gwei| u128::from(gwei) * 1_000_000_000)
    }

    pub fn check_chain_id(&self, network: &str, actual: u64) -> Result<(), NetworkError> {
        match self.chain_id {
            Some(expected) if expected != actual => Err(NetworkError::ChainIdMismatch {
                network: network.to_string(),
                expected,
                actual,
            }),
            _ => Ok(()),
        }
    }

    pub fn to_toml(&self) -> Result<String, NetworkError> {
        Ok(toml::to_string(self)?)
    }
}

/// Deployment parameters for every network the migration knows about.
///
/// A parameters file only needs the tables it overrides:
///
/// ```toml
/// [mainnet]
/// endpoint = "https://my-node.example"
/// chain-id = 1
/// max-fee-per-gas-gwei = 30
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MigrationParameters {
    pub goerli: NetworkConfig,
    pub mainnet: NetworkConfig,
    pub devnet: NetworkConfig,
}

impl Default for MigrationParameters {
    fn default() -> Self {
        Self {
            goerli: NetworkConfig {
                chain_id: Some(TESTNET_CHAIN_ID),
                ..NetworkConfig::new(DEFAULT_TESTNET_ENDPOINT)
            },
            mainnet: NetworkConfig {
                chain_id: Some(MAINNET_CHAIN_ID),
                ..NetworkConfig::new(DEFAULT_MAINNET_ENDPOINT)
            },
            devnet: NetworkConfig::new(DEFAULT_DEVNET_ENDPOINT),
        }
    }
}

impl MigrationParameters {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| NetworkError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, NetworkError> {
        Ok(toml::from_str(text)?)
    }

    pub fn get(&self, kind: NetworkKind) -> &NetworkConfig {
        match kind {
            NetworkKind::Goerli => &self.goerli,
            NetworkKind::Mainnet => &self.mainnet,
            NetworkKind::Devnet => &self.devnet,
        }
    }

    /// Selects the parameters for a network name as given by the migration runner.
    pub fn select(&self, network: &str) -> &NetworkConfig {
        self.get(NetworkKind::from_network(network))
    }
}
