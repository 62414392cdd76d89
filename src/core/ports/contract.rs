//! Contract port
//!
//! Defines the key/value interface exposed by the news contract.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ContractError;

/// Key/value storage exposed by the contract
///
/// The contract has no enumeration primitive. An empty value means the key
/// is absent.
pub trait Contract: Send + Sync {
    /// Probe whether the contract is reachable
    fn is_available(&self) -> Result<bool, ContractError>;

    /// Read the bytes stored under `key` (empty when absent)
    fn get_data(&self, key: &str) -> Result<Vec<u8>, ContractError>;

    /// Overwrite the bytes stored under `key`
    ///
    /// This is a signed write: a wallet may reject it.
    fn set_data(&self, key: &str, data: &[u8]) -> Result<(), ContractError>;
}

impl<T: Contract + ?Sized> Contract for Arc<T> {
    fn is_available(&self) -> Result<bool, ContractError> {
        (**self).is_available()
    }

    fn get_data(&self, key: &str) -> Result<Vec<u8>, ContractError> {
        (**self).get_data(key)
    }

    fn set_data(&self, key: &str, data: &[u8]) -> Result<(), ContractError> {
        (**self).set_data(key, data)
    }
}

/// Contract backend type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractBackend {
    /// JSON file on disk (default, persists between runs)
    #[default]
    File,
    /// In-process map, lost when the process exits
    Memory,
}

impl std::str::FromStr for ContractBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" | "files" => Ok(Self::File),
            "memory" | "mem" => Ok(Self::Memory),
            _ => Err(format!("Unknown backend: {s}. Use 'file' or 'memory'")),
        }
    }
}

impl std::fmt::Display for ContractBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Memory => write!(f, "memory"),
        }
    }
}
