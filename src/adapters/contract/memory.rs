//! In-process contract
//!
//! A map behind a lock. Switches let tests take the contract offline or make
//! the "wallet" reject signed writes.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::core::ports::Contract;
use crate::error::ContractError;

/// Contract storage held in memory
#[derive(Debug, Default)]
pub struct MemoryContract {
    entries: RwLock<HashMap<String, Vec<u8>>>,
    offline: AtomicBool,
    reject_writes: AtomicBool,
}

impl MemoryContract {
    /// Create an empty, reachable contract
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the contract offline (every call fails) or bring it back
    pub fn set_available(&self, available: bool) {
        self.offline.store(!available, Ordering::SeqCst);
    }

    /// Make every `set_data` fail as if the user declined to sign
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }

    /// Store raw bytes, bypassing availability and signing checks
    pub fn insert_raw(&self, key: impl Into<String>, data: impl Into<Vec<u8>>) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.into(), data.into());
        }
    }

    /// Raw bytes under `key`, if any
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.read().ok().and_then(|entries| entries.get(key).cloned())
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().map_or(0, |entries| entries.len())
    }

    /// Whether nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn ensure_online(&self) -> Result<(), ContractError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(ContractError::Unavailable)
        } else {
            Ok(())
        }
    }
}

impl Contract for MemoryContract {
    fn is_available(&self) -> Result<bool, ContractError> {
        Ok(!self.offline.load(Ordering::SeqCst))
    }

    fn get_data(&self, key: &str) -> Result<Vec<u8>, ContractError> {
        self.ensure_online()?;
        let entries = self
            .entries
            .read()
            .map_err(|_| ContractError::Backend("memory contract lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned().unwrap_or_default())
    }

    fn set_data(&self, key: &str, data: &[u8]) -> Result<(), ContractError> {
        self.ensure_online()?;
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(ContractError::Rejected);
        }
        let mut entries = self
            .entries
            .write()
            .map_err(|_| ContractError::Backend("memory contract lock poisoned".to_string()))?;
        log::debug!("set_data '{key}' ({} bytes)", data.len());
        entries.insert(key.to_string(), data.to_vec());
        Ok(())
    }
}
