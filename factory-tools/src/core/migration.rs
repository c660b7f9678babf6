// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The Factory deployment migration.
//!
//! A migration runs once per invocation: select the network parameters, deploy, record. The
//! runner supplies the deployer, the network name and the accounts.

use std::path::{Path, PathBuf};

use alloy::primitives::Address;

use crate::{
    core::{
        artifact::Artifact,
        deployment::ContractDeployer,
        env_file,
        network::{MigrationParameters, NetworkConfig, NetworkKind},
        record::{self, RecordStatus},
    },
    utils::color::DebugColor,
    Result,
};

/// The Factory migration bound to one network.
#[derive(Debug)]
pub struct FactoryMigration<'a> {
    network: String,
    kind: NetworkKind,
    config: &'a NetworkConfig,
    env_dir: PathBuf,
}

impl<'a> FactoryMigration<'a> {
    /// Selects the parameters for `network`. This never fails: unknown networks use the devnet
    /// parameters.
    pub fn new(
        parameters: &'a MigrationParameters,
        network: impl Into<String>,
        env_dir: impl Into<PathBuf>,
    ) -> Self {
        let network = network.into();
        let kind = NetworkKind::from_network(&network);
        Self {
            config: parameters.get(kind),
            network,
            kind,
            env_dir: env_dir.into(),
        }
    }

    pub fn network(&self) -> &str {
        &self.network
    }

    pub fn kind(&self) -> NetworkKind {
        self.kind
    }

    pub fn config(&self) -> &'a NetworkConfig {
        self.config
    }

    pub fn env_dir(&self) -> &Path {
        &self.env_dir
    }

    /// Deploys `artifact` and records the outcome.
    ///
    /// A failed deployment is reported through [`RecordStatus::Failed`]; only errors talking to
    /// the chain or writing the env file are returned as errors. The env key is checked before
    /// anything is sent, so a deployed address always has somewhere to go.
    pub async fn run(
        &self,
        artifact: &Artifact,
        deployer: &impl ContractDeployer,
        accounts: &[Address],
    ) -> Result<RecordStatus> {
        debug!(@grey,
            "network {} uses {} parameters ({})",
            self.network.debug_lavender(),
            self.kind,
            self.config.endpoint
        );
        env_file::validate_key(&record::address_key(artifact.name(), &self.network))?;
        let outcome = deployer.deploy(artifact).await?;
        let status = record::record(
            artifact.name(),
            &self.network,
            &outcome,
            accounts.first().copied(),
            &self.env_dir,
        )?;
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, fs};

    use alloy::primitives::TxHash;

    use super::*;
    use crate::{
        core::{
            deployment::{DeployedContract, DeploymentError, DeploymentOutcome},
            env_file::{env_file_path, get_env_value, EnvEntry, EnvFileError},
        },
        Error,
    };

    struct MockDeployer {
        outcomes: Vec<DeploymentOutcome>,
        calls: Cell<usize>,
    }

    impl MockDeployer {
        fn new(outcomes: Vec<DeploymentOutcome>) -> Self {
            Self {
                outcomes,
                calls: Cell::new(0),
            }
        }

        fn deploying(addresses: &[Address]) -> Self {
            Self::new(
                addresses
                    .iter()
                    .map(|&address| {
                        DeploymentOutcome::Deployed(DeployedContract {
                            address,
                            tx_hash: TxHash::ZERO,
                        })
                    })
                    .collect(),
            )
        }
    }

    impl ContractDeployer for MockDeployer {
        async fn accounts(&self) -> Result<Vec<Address>, DeploymentError> {
            Ok(vec![Address::repeat_byte(0x01)])
        }

        async fn deploy(&self, _: &Artifact) -> Result<DeploymentOutcome, DeploymentError> {
            let call = self.calls.get();
            self.calls.set(call + 1);
            self.outcomes
                .get(call)
                .cloned()
                .ok_or(DeploymentError::FailedToComplete)
        }
    }

    struct BrokenDeployer;

    impl ContractDeployer for BrokenDeployer {
        async fn accounts(&self) -> Result<Vec<Address>, DeploymentError> {
            Err(DeploymentError::NoAccounts)
        }

        async fn deploy(&self, _: &Artifact) -> Result<DeploymentOutcome, DeploymentError> {
            Err(DeploymentError::NoAccounts)
        }
    }

    fn factory() -> Artifact {
        Artifact::new("Factory", vec![0x60u8, 0x80, 0x60, 0x40]).unwrap()
    }

    #[test]
    fn selects_parameters_by_network() {
        let params = MigrationParameters::default();
        let dir = Path::new("../");
        assert_eq!(FactoryMigration::new(&params, "rinkeby", dir).kind(), NetworkKind::Goerli);
        assert_eq!(FactoryMigration::new(&params, "mainnet", dir).config(), &params.mainnet);
        assert_eq!(FactoryMigration::new(&params, "development", dir).config(), &params.devnet);
        assert_eq!(FactoryMigration::new(&params, "Mainnet", dir).config(), &params.devnet);
    }

    #[tokio::test]
    async fn deploys_and_records_address() {
        let dir = tempfile::tempdir().unwrap();
        let params = MigrationParameters::default();
        let address = Address::repeat_byte(0xab);
        let deployer = MockDeployer::deploying(&[address]);
        let accounts = deployer.accounts().await.unwrap();

        let migration = FactoryMigration::new(&params, "mainnet", dir.path());
        let status = migration.run(&factory(), &deployer, &accounts).await.unwrap();

        assert_eq!(
            status,
            RecordStatus::Recorded {
                entry: EnvEntry::new("Factory_ADDRESSMAINNET", address.to_string()),
                creator: Some(accounts[0]),
            }
        );
        assert_eq!(deployer.calls.get(), 1);
    }

    #[tokio::test]
    async fn creator_is_first_account() {
        let dir = tempfile::tempdir().unwrap();
        let params = MigrationParameters::default();
        let deployer = MockDeployer::deploying(&[Address::repeat_byte(0xab)]);
        let accounts = [Address::repeat_byte(0x0a), Address::repeat_byte(0x0b)];

        let migration = FactoryMigration::new(&params, "development", dir.path());
        let status = migration.run(&factory(), &deployer, &accounts).await.unwrap();

        let RecordStatus::Recorded { creator, .. } = &status else {
            panic!("expected a recorded address, got {status:?}");
        };
        assert_eq!(*creator, Some(accounts[0]));
    }

    #[tokio::test]
    async fn dashed_network_name_is_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let params = MigrationParameters::default();
        let address = Address::repeat_byte(0xef);
        let deployer = MockDeployer::deploying(&[address]);

        let migration = FactoryMigration::new(&params, "rinkeby-fork", dir.path());
        assert_eq!(migration.kind(), NetworkKind::Devnet);
        migration.run(&factory(), &deployer, &[]).await.unwrap();

        assert_eq!(deployer.calls.get(), 1);
        assert_eq!(
            get_env_value(dir.path(), "Factory_ADDRESSRINKEBY_FORK").unwrap(),
            Some(address.to_string())
        );
    }

    #[tokio::test]
    async fn unwritable_key_is_rejected_before_deploying() {
        let dir = tempfile::tempdir().unwrap();
        let params = MigrationParameters::default();
        let deployer = MockDeployer::deploying(&[Address::repeat_byte(0xef)]);
        let artifact = Artifact::new("My-Factory", vec![0x60u8, 0x80]).unwrap();

        let migration = FactoryMigration::new(&params, "mainnet", dir.path());
        let err = migration.run(&artifact, &deployer, &[]).await.unwrap_err();

        assert!(matches!(err, Error::EnvFile(EnvFileError::InvalidKey(_))));
        assert_eq!(deployer.calls.get(), 0);
        assert!(!env_file_path(dir.path()).exists());
    }

    #[tokio::test]
    async fn failed_deployment_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let params = MigrationParameters::default();
        let deployer = MockDeployer::new(vec![DeploymentOutcome::Failed {
            reason: "out of gas".into(),
        }]);

        let migration = FactoryMigration::new(&params, "rinkeby", dir.path());
        let status = migration.run(&factory(), &deployer, &[]).await.unwrap();

        assert_eq!(status, RecordStatus::Failed);
        assert!(!env_file_path(dir.path()).exists());
    }

    #[tokio::test]
    async fn second_run_overwrites_first() {
        let dir = tempfile::tempdir().unwrap();
        let params = MigrationParameters::default();
        let first = Address::repeat_byte(0x11);
        let second = Address::repeat_byte(0x22);
        let deployer = MockDeployer::deploying(&[first, second]);

        let migration = FactoryMigration::new(&params, "rinkeby", dir.path());
        migration.run(&factory(), &deployer, &[]).await.unwrap();
        migration.run(&factory(), &deployer, &[]).await.unwrap();

        assert_eq!(
            get_env_value(dir.path(), "Factory_ADDRESSRINKEBY").unwrap(),
            Some(second.to_string())
        );
        let contents = fs::read_to_string(env_file_path(dir.path())).unwrap();
        assert_eq!(contents.lines().count(), 1);
    }

    #[tokio::test]
    async fn unknown_network_records_under_its_own_name() {
        let dir = tempfile::tempdir().unwrap();
        let params = MigrationParameters::default();
        let address = Address::repeat_byte(0xcd);
        let deployer = MockDeployer::deploying(&[address]);

        let migration = FactoryMigration::new(&params, "Mainnet", dir.path());
        assert_eq!(migration.kind(), NetworkKind::Devnet);
        migration.run(&factory(), &deployer, &[]).await.unwrap();

        assert_eq!(
            get_env_value(dir.path(), "Factory_ADDRESSMAINNET").unwrap(),
            Some(address.to_string())
        );
    }

    #[tokio::test]
    async fn deployer_errors_propagate() {
        let dir = tempfile::tempdir().unwrap();
        let params = MigrationParameters::default();

        let migration = FactoryMigration::new(&params, "development", dir.path());
        let err = migration.run(&factory(), &BrokenDeployer, &[]).await.unwrap_err();

        assert!(matches!(err, Error::Deployment(DeploymentError::NoAccounts)));
        assert!(!env_file_path(dir.path()).exists());
    }
}
