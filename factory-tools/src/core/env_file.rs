// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Minimal `.env` file access.
//!
//! Later tooling finds deployed contracts through `KEY=value` lines in a `.env` file. Only whole
//! lines are read and written: no quoting, escaping or interpolation.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

/// File name of the environment file inside its base directory.
pub const ENV_FILE_NAME: &str = ".env";

#[derive(Debug, thiserror::Error)]
pub enum EnvFileError {
    #[error("invalid env key {0:?}")]
    InvalidKey(String),
    #[error("invalid value for {key}: values must fit on one line")]
    InvalidValue { key: String },
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// A single `KEY=value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvEntry {
    pub key: String,
    pub value: String,
}

impl EnvEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Writes this entry into the env file under `base_dir`.
    pub fn write(&self, base_dir: impl AsRef<Path>) -> Result<(), EnvFileError> {
        set_env_value(base_dir, &self.key, &self.value)
    }
}

pub fn env_file_path(base_dir: impl AsRef<Path>) -> PathBuf {
    base_dir.as_ref().join(ENV_FILE_NAME)
}

/// Sets `key` to `value` in `<base_dir>/.env`, creating the file if needed.
///
/// An existing line for `key` is replaced in place; otherwise the entry is appended. All other
/// lines are kept as they are. The file is replaced atomically.
pub fn set_env_value(
    base_dir: impl AsRef<Path>,
    key: &str,
    value: &str,
) -> Result<(), EnvFileError> {
    validate_key(key)?;
    if value.contains(['\n', '\r']) {
        return Err(EnvFileError::InvalidValue {
            key: key.to_string(),
        });
    }

    let base_dir = base_dir.as_ref();
    let path = env_file_path(base_dir);
    let current = read_env_file(&path)?;

    let entry = format!("{key}={value}");
    let mut found = false;
    let mut lines = Vec::new();
    for line in current.lines() {
        if line_key(line) == Some(key) {
            // Duplicate lines for the same key collapse into the first one.
            if !found {
                lines.push(entry.clone());
                found = true;
            }
        } else {
            lines.push(line.to_string());
        }
    }
    if !found {
        lines.push(entry);
    }

    let mut contents = lines.join("\n");
    contents.push('\n');

    // A symlinked env file is updated at its target, keeping the link.
    let target = match fs::canonicalize(&path) {
        Ok(target) => target,
        Err(err) if err.kind() == io::ErrorKind::NotFound => path,
        Err(source) => return Err(EnvFileError::Read { path, source }),
    };
    let write_err = |source: io::Error| EnvFileError::Write {
        path: target.clone(),
        source,
    };
    let dir = target.parent().unwrap_or(base_dir);
    let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
    file.write_all(contents.as_bytes()).map_err(write_err)?;
    match fs::metadata(&target) {
        Ok(metadata) => file
            .as_file()
            .set_permissions(metadata.permissions())
            .map_err(write_err)?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(source) => return Err(write_err(source)),
    }
    file.persist(&target).map_err(|err| write_err(err.error))?;
    Ok(())
}

/// Returns the value of `key` in `<base_dir>/.env`, if both exist.
pub fn get_env_value(
    base_dir: impl AsRef<Path>,
    key: &str,
) -> Result<Option<String>, EnvFileError> {
    validate_key(key)?;
    let contents = read_env_file(&env_file_path(base_dir))?;
    Ok(contents.lines().find_map(|line| {
        let (k, v) = line.split_once('=')?;
        (normalize_key(k) == key).then(|| v.trim().to_string())
    }))
}

fn read_env_file(path: &Path) -> Result<String, EnvFileError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(source) => Err(EnvFileError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn line_key(line: &str) -> Option<&str> {
    line.split_once('=').map(|(key, _)| normalize_key(key))
}

fn normalize_key(key: &str) -> &str {
    let key = key.trim();
    key.strip_prefix("export ").map(str::trim).unwrap_or(key)
}

/// Checks that `key` can be written to and read back from an env file.
pub fn validate_key(key: &str) -> Result<(), EnvFileError> {
    let valid = !key.is_empty()
        && !key.starts_with(|c: char| c.is_ascii_digit())
        && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(EnvFileError::InvalidKey(key.to_string()))
    }
}
