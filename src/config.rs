//! Global configuration management
//!
//! Provides persistent storage for the contract backend, key layout and the
//! connected session. Config is stored at `~/.newsproof/config.toml`, or
//! wherever `NEWSPROOF_CONFIG` points.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::models::Session;
use crate::core::ports::ContractBackend;
use crate::core::services::{DEFAULT_INDEX_KEY, DEFAULT_RECORD_PREFIX, StoreOptions};
use crate::paths;

/// Global newsproof configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Contract backend and key layout
    #[serde(default)]
    pub contract: ContractConfig,
    /// Simulated processing
    #[serde(default)]
    pub processing: ProcessingConfig,
    /// Connected account
    #[serde(default)]
    pub session: SessionConfig,
}

/// Contract backend and key layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractConfig {
    /// Which backend stores the data
    #[serde(default)]
    pub backend: ContractBackend,
    /// Data file of the file backend (defaults next to the config file)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Key holding the record index
    #[serde(default = "default_index_key")]
    pub index_key: String,
    /// Prefix of record keys
    #[serde(default = "default_record_prefix")]
    pub record_prefix: String,
}

fn default_index_key() -> String {
    DEFAULT_INDEX_KEY.to_string()
}

fn default_record_prefix() -> String {
    DEFAULT_RECORD_PREFIX.to_string()
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            backend: ContractBackend::default(),
            path: None,
            index_key: default_index_key(),
            record_prefix: default_record_prefix(),
        }
    }
}

/// Simulated processing settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Pause before verify/dispute, in milliseconds
    #[serde(default)]
    pub delay_ms: u64,
}

/// Persisted session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Connected wallet account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
}

impl Config {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, or defaults if missing or unreadable
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, or defaults if missing or unreadable
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path).map(|content| toml::from_str(&content)) {
            Ok(Ok(config)) => config,
            Ok(Err(e)) => {
                log::warn!("Ignoring unparsable config {}: {e}", path.display());
                Self::default()
            },
            Err(e) => {
                log::warn!("Cannot read config {}: {e}", path.display());
                Self::default()
            },
        }
    }

    /// Save config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Data file used by the file backend
    #[must_use]
    pub fn contract_path(&self) -> PathBuf {
        self.contract.path.clone().unwrap_or_else(paths::default_contract_file)
    }

    /// Record store options described by this config
    #[must_use]
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            index_key: self.contract.index_key.clone(),
            record_prefix: self.contract.record_prefix.clone(),
            processing_delay: Duration::from_millis(self.processing.delay_ms),
        }
    }

    /// The persisted session
    #[must_use]
    pub fn session(&self) -> Session {
        self.session.account.as_deref().map_or_else(Session::disconnected, Session::connected)
    }

    /// Persist a session's account
    pub fn set_session(&mut self, session: &Session) {
        self.session.account = session.account().map(String::from);
    }
}
