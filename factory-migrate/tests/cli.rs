// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fs;

use assert_cmd::Command;

fn factory_migrate(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("factory-migrate").unwrap();
    cmd.current_dir(dir.path()).env_remove("NETWORK");
    cmd
}

fn stdout(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn config_selects_dedicated_networks() {
    let dir = tempfile::tempdir().unwrap();

    let out = stdout(factory_migrate(&dir).args(["config", "--network", "mainnet"]));
    assert!(out.contains("uses [mainnet]"), "{out}");
    assert!(out.contains("chain-id = 1"), "{out}");

    let out = stdout(factory_migrate(&dir).args(["config", "--network", "rinkeby"]));
    assert!(out.contains("uses [goerli]"), "{out}");
}

#[test]
fn config_falls_back_to_devnet() {
    let dir = tempfile::tempdir().unwrap();
    for network in ["development", "Mainnet", "sepolia"] {
        let out = stdout(factory_migrate(&dir).args(["config", "--network", network]));
        assert!(out.contains("uses [devnet]"), "{network}: {out}");
        assert!(out.contains("http://localhost:8545"), "{network}: {out}");
    }

    let out = stdout(factory_migrate(&dir).arg("config"));
    assert!(out.contains("network development uses [devnet]"), "{out}");
}

#[test]
fn config_reads_parameters_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("migration-parameters.toml"),
        "[goerli]\nendpoint = \"http://goerli.local:8545\"\n",
    )
    .unwrap();

    let out = stdout(factory_migrate(&dir).args(["config", "--network", "rinkeby"]));
    assert!(out.contains("http://goerli.local:8545"), "{out}");

    factory_migrate(&dir)
        .args(["config", "--parameters", "missing.toml"])
        .assert()
        .failure();
}

#[test]
fn address_reads_env_file() {
    let dir = tempfile::tempdir().unwrap();
    let env_dir = dir.path().join("project");
    fs::create_dir(&env_dir).unwrap();
    fs::write(
        env_dir.join(".env"),
        "Factory_ADDRESSMAINNET=0x00000000000000000000000000000000000000aB\n",
    )
    .unwrap();

    let out = stdout(factory_migrate(&dir).args([
        "address",
        "--network",
        "mainnet",
        "--env-dir",
        "project",
    ]));
    assert_eq!(out.trim(), "0x00000000000000000000000000000000000000aB");

    factory_migrate(&dir)
        .args(["address", "--network", "rinkeby", "--env-dir", "project"])
        .assert()
        .failure();
}

#[test]
fn deploy_requires_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let assert = factory_migrate(&dir)
        .args(["deploy", "--network", "development"])
        .assert()
        .failure();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("failed to read artifact"), "{stderr}");
}
