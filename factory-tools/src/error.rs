// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Artifact(#[from] crate::core::artifact::ArtifactError),
    #[error("{0}")]
    Deployment(#[from] crate::core::deployment::DeploymentError),
    #[error("{0}")]
    EnvFile(#[from] crate::core::env_file::EnvFileError),
    #[error("{0}")]
    Network(#[from] crate::core::network::NetworkError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{artifact::ArtifactError, network::NetworkError};

    #[test]
    fn module_errors_keep_their_message() {
        let err = Error::from(ArtifactError::EmptyBytecode("Factory".into()));
        assert!(matches!(err, Error::Artifact(_)));
        assert_eq!(
            err.to_string(),
            ArtifactError::EmptyBytecode("Factory".into()).to_string()
        );

        let err = Error::from(NetworkError::ChainIdMismatch {
            network: "mainnet".into(),
            expected: 1,
            actual: 5,
        });
        assert!(matches!(err, Error::Network(_)));
        assert!(err.to_string().contains("mainnet"));
    }
}
