// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::{
    network::EthereumWallet,
    primitives::FixedBytes,
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::{
        local::{LocalSigner, PrivateKeySigner},
        Signer,
    },
};
use eyre::{eyre, Context};
use factory_tools::{
    core::{
        migration::FactoryMigration,
        network::{MigrationParameters, NetworkConfig},
    },
    utils::{absolute_path, decode0x},
};

use crate::{
    constants::{DEFAULT_ENV_DIR, DEFAULT_NETWORK, DEFAULT_PARAMETERS_PATH},
    utils::convert_gwei_to_wei,
};

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// File path to a text file containing a hex-encoded private key
    #[arg(long)]
    private_key_path: Option<PathBuf>,
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long)]
    private_key: Option<String>,
    /// Path to an Ethereum wallet keystore file (e.g. clef)
    #[arg(long)]
    keystore_path: Option<String>,
    /// Keystore password file
    #[arg(long)]
    keystore_password_path: Option<PathBuf>,
    /// Optional max fee per gas in gwei units. Overrides the network parameters.
    #[arg(long)]
    max_fee_per_gas_gwei: Option<String>,
}

impl AuthArgs {
    fn build_wallet(&self, chain_id: u64) -> eyre::Result<EthereumWallet> {
        if let Some(key) = &self.private_key {
            if key.is_empty() {
                return Err(eyre!("empty private key"));
            }
            return wallet_from_key(key, chain_id);
        }

        if let Some(file) = &self.private_key_path {
            let key = fs::read_to_string(file).wrap_err("could not open private key file")?;
            return wallet_from_key(&key, chain_id);
        }

        let keystore = self
            .keystore_path
            .as_ref()
            .ok_or(eyre!("no wallet: pass --private-key, --private-key-path or --keystore-path"))?;
        let password = self
            .keystore_password_path
            .as_ref()
            .map(fs::read_to_string)
            .unwrap_or(Ok("".into()))?;

        let signer = LocalSigner::decrypt_keystore(keystore, password.trim_end())?
            .with_chain_id(Some(chain_id));
        Ok(EthereumWallet::new(signer))
    }

    pub fn get_max_fee_per_gas_wei(&self) -> eyre::Result<Option<u128>> {
        self.max_fee_per_gas_gwei
            .as_ref()
            .map(|fee_str| convert_gwei_to_wei(fee_str))
            .transpose()
    }
}

fn wallet_from_key(key: &str, chain_id: u64) -> eyre::Result<EthereumWallet> {
    let key = decode0x(key)?;
    if key.len() != 32 {
        return Err(eyre!("private key must be 32 bytes, got {}", key.len()));
    }
    let priv_key_bytes: FixedBytes<32> = FixedBytes::from_slice(&key);
    let signer = PrivateKeySigner::from_bytes(&priv_key_bytes)?.with_chain_id(Some(chain_id));
    Ok(EthereumWallet::new(signer))
}

#[derive(Debug, clap::Args)]
pub struct NetworkArgs {
    /// Network to migrate, as a migration runner names it (`development`, `rinkeby`,
    /// `mainnet`, ...). Unrecognized names use the devnet parameters.
    #[arg(short, long, env = "NETWORK", default_value = DEFAULT_NETWORK)]
    pub network: String,
    /// Migration parameters file [default: migration-parameters.toml if it exists, otherwise
    /// built-in parameters]
    #[arg(long)]
    parameters: Option<PathBuf>,
    /// Directory of the `.env` file deployed addresses are written to
    #[arg(long, default_value = DEFAULT_ENV_DIR)]
    env_dir: PathBuf,
}

impl NetworkArgs {
    pub fn parameters(&self) -> eyre::Result<MigrationParameters> {
        if let Some(path) = &self.parameters {
            return Ok(MigrationParameters::load(path)?);
        }
        let path = Path::new(DEFAULT_PARAMETERS_PATH);
        if path.exists() {
            log::debug!("using migration parameters from {}", path.display());
            Ok(MigrationParameters::load(path)?)
        } else {
            log::debug!("using built-in migration parameters");
            Ok(MigrationParameters::default())
        }
    }

    /// Selects the network's parameters. The env directory is resolved here, once.
    pub fn migration<'a>(
        &self,
        parameters: &'a MigrationParameters,
    ) -> eyre::Result<FactoryMigration<'a>> {
        let env_dir = absolute_path(&self.env_dir)
            .wrap_err_with(|| format!("could not resolve {}", self.env_dir.display()))?;
        Ok(FactoryMigration::new(parameters, &self.network, env_dir))
    }
}

#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// RPC endpoint [default: endpoint from the network parameters]
    #[arg(short, long)]
    pub endpoint: Option<String>,
}

impl ProviderArgs {
    fn endpoint<'a>(&'a self, config: &'a NetworkConfig) -> &'a str {
        self.endpoint.as_deref().unwrap_or(&config.endpoint)
    }

    pub async fn build_provider(&self, config: &NetworkConfig) -> eyre::Result<impl Provider> {
        let provider = ProviderBuilder::new()
            .connect(self.endpoint(config))
            .await?;
        Ok(provider)
    }

    pub async fn build_provider_with_wallet(
        &self,
        config: &NetworkConfig,
        auth: &AuthArgs,
    ) -> eyre::Result<impl Provider + WalletProvider> {
        let provider = self.build_provider(config).await?;
        let chain_id = provider.get_chain_id().await?;
        let wallet = auth.build_wallet(chain_id)?;
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect(self.endpoint(config))
            .await?;
        Ok(provider)
    }
}
