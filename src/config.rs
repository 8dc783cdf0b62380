use crate::tv::{AliasTable, DeviceAddress, Timing, DEFAULT_PORT};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    /// Extra or replacement fallback lists, keyed by logical command
    #[serde(default)]
    pub aliases: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeviceConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingConfig {
    #[serde(default = "default_command_timeout_ms")]
    pub command_timeout_ms: u64,
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,
    /// Delay before the first key press of a command
    #[serde(default = "default_pre_send_delay_ms")]
    pub pre_send_delay_ms: u64,
    /// Pause between fallback candidates
    #[serde(default = "default_candidate_pause_ms")]
    pub candidate_pause_ms: u64,
}

fn default_host() -> String {
    "192.168.1.191".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_command_timeout_ms() -> u64 {
    5000
}

fn default_probe_timeout_ms() -> u64 {
    3000
}

fn default_pre_send_delay_ms() -> u64 {
    100
}

fn default_candidate_pause_ms() -> u64 {
    200
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            command_timeout_ms: default_command_timeout_ms(),
            probe_timeout_ms: default_probe_timeout_ms(),
            pre_send_delay_ms: default_pre_send_delay_ms(),
            candidate_pause_ms: default_candidate_pause_ms(),
        }
    }
}

impl Config {
    /// Return the path to the configuration file.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "philips-remote", "philips-remote")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }

    /// Load config from `path`, falling back to defaults if missing or corrupt.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        match toml::from_str::<Config>(&data) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to parse config, using defaults");
                Ok(Config::default())
            }
        }
    }

    /// Save config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(self)?;
        fs::write(path, data)
            .with_context(|| format!("Failed to write config file at {}", path.display()))?;

        Ok(())
    }

    pub fn address(&self) -> DeviceAddress {
        DeviceAddress::new(self.device.host.clone(), self.device.port)
    }

    pub fn timing(&self) -> Timing {
        Timing {
            command_timeout: Duration::from_millis(self.timing.command_timeout_ms),
            probe_timeout: Duration::from_millis(self.timing.probe_timeout_ms),
            pre_send_delay: Duration::from_millis(self.timing.pre_send_delay_ms),
            candidate_pause: Duration::from_millis(self.timing.candidate_pause_ms),
        }
    }

    pub fn alias_table(&self) -> AliasTable {
        AliasTable::with_overrides(&self.aliases)
    }
}
