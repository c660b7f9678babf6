// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts.
//!
//! Artifacts are the JSON files a Solidity build pipeline writes per contract, e.g.
//! `build/contracts/Factory.json`. Only the contract name and creation bytecode are read.

use std::{fs, path::Path};

use alloy::primitives::Bytes;
use serde::Deserialize;

use crate::utils::decode0x;

/// Name of the contract this migration deploys.
pub const FACTORY_CONTRACT_NAME: &str = "Factory";

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid artifact json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("artifact bytecode is not valid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("artifact {0} has no bytecode (is it an interface or abstract contract?)")]
    EmptyBytecode(String),
    #[error("expected artifact for {expected}, found {found}")]
    WrongContract { expected: String, found: String },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArtifactJson {
    contract_name: String,
    bytecode: String,
}

/// A compiled contract ready to be deployed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    name: String,
    bytecode: Bytes,
}

impl Artifact {
    pub fn new(name: impl Into<String>, bytecode: impl Into<Bytes>) -> Result<Self, ArtifactError> {
        let name = name.into();
        let bytecode = bytecode.into();
        if bytecode.is_empty() {
            return Err(ArtifactError::EmptyBytecode(name));
        }
        Ok(Self { name, bytecode })
    }

    pub fn from_json(text: &str) -> Result<Self, ArtifactError> {
        let json: ArtifactJson = serde_json::from_str(text)?;
        let bytecode = decode0x(&json.bytecode)?;
        Self::new(json.contract_name, bytecode)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ArtifactError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Loads an artifact and checks it is the one for `expected`.
    pub fn load_contract(path: impl AsRef<Path>, expected: &str) -> Result<Self, ArtifactError> {
        let artifact = Self::load(path)?;
        if artifact.name != expected {
            return Err(ArtifactError::WrongContract {
                expected: expected.to_string(),
                found: artifact.name,
            });
        }
        Ok(artifact)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Creation bytecode, sent as the input of the deployment transaction.
    pub fn bytecode(&self) -> &Bytes {
        &self.bytecode
    }
}
