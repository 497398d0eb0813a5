//! Test-only helpers for building configs and config files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::io::config::{DEFAULT_CONFIG_FILE, PlaygroundConfig, write_config};

/// Convert string literals into owned names.
pub fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Default config with replaced `names` and `numbers`.
pub fn config_with(names_list: &[&str], numbers: &[u64]) -> PlaygroundConfig {
    PlaygroundConfig {
        names: names(names_list),
        numbers: numbers.to_vec(),
        ..PlaygroundConfig::default()
    }
}

/// Temporary directory holding a playground config file.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create tempdir")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join(DEFAULT_CONFIG_FILE)
    }

    /// Write a validated config to the default location.
    pub fn write_config(&self, cfg: &PlaygroundConfig) -> Result<PathBuf> {
        let path = self.config_path();
        write_config(&path, cfg)?;
        Ok(path)
    }

    /// Write raw TOML, bypassing validation.
    pub fn write_raw_config(&self, contents: &str) -> Result<PathBuf> {
        let path = self.config_path();
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }
}
