// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// Network name used when none is given, as migration runners do for local chains.
pub const DEFAULT_NETWORK: &str = "development";

/// Directory holding the `.env` file that deployed addresses are written to.
pub const DEFAULT_ENV_DIR: &str = "../";

/// Migration parameters file, read if present.
pub const DEFAULT_PARAMETERS_PATH: &str = "migration-parameters.toml";

/// Build artifact of the Factory contract.
pub const DEFAULT_ARTIFACT_PATH: &str = "build/contracts/Factory.json";
