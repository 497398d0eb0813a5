//! Playground inputs stored in a TOML file (default `playground.toml`).

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::digits::DigitNames;

/// Default config file name, resolved against the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "playground.toml";

/// Playground configuration (TOML).
///
/// Every field is optional in the file; missing fields fall back to the
/// tutorial's own data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// Names sorted by the comparator snippets.
    pub names: Vec<String>,

    /// Numbers spelled out by the digit-name snippet.
    pub numbers: Vec<u64>,

    /// Name of each decimal digit, indexed by the digit.
    pub digit_names: DigitNames,

    pub counter: CounterConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CounterConfig {
    /// Step of each independent counter. The first one is also aliased.
    pub steps: Vec<i64>,

    /// Invocations of each counter before aliasing is demonstrated.
    pub calls: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            steps: vec![10, 7],
            calls: 3,
        }
    }
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            names: ["Chris", "Alex", "Ewa", "Barry", "Daniella"]
                .iter()
                .map(|name| name.to_string())
                .collect(),
            numbers: vec![16, 58, 510],
            digit_names: DigitNames::default(),
            counter: CounterConfig::default(),
        }
    }
}

impl PlaygroundConfig {
    pub fn validate(&self) -> Result<()> {
        if self.counter.steps.len() < 2 {
            return Err(anyhow!("counter.steps must list at least two steps"));
        }
        if self.counter.steps.contains(&0) {
            return Err(anyhow!("counter.steps must not contain 0"));
        }
        if self.counter.calls == 0 {
            return Err(anyhow!("counter.calls must be > 0"));
        }
        // Snippets invoke the first counter up to `calls + 2` times.
        let max_calls = i64::from(self.counter.calls) + 2;
        if let Some(step) = self
            .counter
            .steps
            .iter()
            .find(|step| step.checked_mul(max_calls).is_none())
        {
            return Err(anyhow!(
                "counter.steps: {step} overflows within {max_calls} calls"
            ));
        }
        if self.names.is_empty() {
            return Err(anyhow!("names must be a non-empty array"));
        }
        let mut seen = HashSet::new();
        for name in &self.names {
            if !seen.insert(name.as_str()) {
                return Err(anyhow!("names must be distinct, '{name}' appears twice"));
            }
        }
        if self.numbers.is_empty() {
            return Err(anyhow!("numbers must be a non-empty array"));
        }
        self.digit_names.validate()?;
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `PlaygroundConfig::default()`.
pub fn load_config(path: &Path) -> Result<PlaygroundConfig> {
    if !path.exists() {
        let cfg = PlaygroundConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PlaygroundConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &PlaygroundConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
