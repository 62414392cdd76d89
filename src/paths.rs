//! Centralized path definitions for newsproof
//!
//! This module provides a single source of truth for all filesystem paths.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.newsproof/
//! ├── config.toml       # Backend, key layout, connected account
//! └── contract.json     # File contract data (default location)
//! ```
//!
//! Setting `NEWSPROOF_CONFIG` moves the config file; the default contract
//! file follows it into the same directory.

use std::path::PathBuf;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "NEWSPROOF_CONFIG";

/// Global config directory name
const GLOBAL_DIR: &str = ".newsproof";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Default file contract filename
const CONTRACT_FILE: &str = "contract.json";

/// Get the global newsproof directory.
///
/// Returns `~/.newsproof/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the config file path.
///
/// Returns `$NEWSPROOF_CONFIG` when set, otherwise `~/.newsproof/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => global_config_dir().join(GLOBAL_CONFIG_FILE),
    }
}

/// Get the default file contract path.
///
/// Lives next to the config file.
#[must_use]
pub fn default_contract_file() -> PathBuf {
    let config = global_config();
    config
        .parent()
        .map_or_else(global_config_dir, std::path::Path::to_path_buf)
        .join(CONTRACT_FILE)
}
