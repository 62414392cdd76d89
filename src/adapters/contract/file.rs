//! File-backed contract
//!
//! Stands in for on-chain storage so the CLI keeps its data between runs.
//! The file is a JSON object mapping keys to base64-encoded values:
//!
//! ```json
//! {
//!   "news_keys": "WyIxNzAwMDAwMDAwMDAwLWszajl4MGEiXQ==",
//!   "news_1700000000000-k3j9x0a": "eyJjb250ZW50Ijoi..."
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::core::ports::Contract;
use crate::error::ContractError;

/// Contract storage kept in a JSON file
#[derive(Debug, Clone)]
pub struct FileContract {
    path: PathBuf,
}

impl FileContract {
    /// Use the file at `path` (created on first write)
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, ContractError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|e| {
            ContractError::Backend(format!("cannot parse {}: {e}", self.path.display()))
        })
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), ContractError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| ContractError::Backend(e.to_string()))?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl Contract for FileContract {
    fn is_available(&self) -> Result<bool, ContractError> {
        if self.path.exists() {
            return Ok(self.load().is_ok());
        }
        Ok(self
            .path
            .parent()
            .is_none_or(|parent| parent.as_os_str().is_empty() || parent.is_dir()))
    }

    fn get_data(&self, key: &str) -> Result<Vec<u8>, ContractError> {
        let entries = self.load()?;
        match entries.get(key) {
            Some(encoded) => STANDARD
                .decode(encoded)
                .map_err(|e| ContractError::Backend(format!("bad value under '{key}': {e}"))),
            None => Ok(Vec::new()),
        }
    }

    fn set_data(&self, key: &str, data: &[u8]) -> Result<(), ContractError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), STANDARD.encode(data));
        self.save(&entries)?;
        log::debug!("set_data '{key}' ({} bytes) -> {}", data.len(), self.path.display());
        Ok(())
    }
}
