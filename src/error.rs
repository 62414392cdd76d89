//! Error types for contract access and record store operations

use thiserror::Error;

use crate::core::models::DraftError;

/// Failures reported by a contract backend
#[derive(Debug, Error)]
pub enum ContractError {
    /// The backend could not be reached
    #[error("contract is not available")]
    Unavailable,

    /// The user declined to sign the transaction
    #[error("user rejected transaction")]
    Rejected,

    /// The contract call reverted
    #[error("contract call reverted: {0}")]
    Reverted(String),

    /// The backend's own storage is unreadable
    #[error("storage backend error: {0}")]
    Backend(String),

    /// Filesystem error in a local backend
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures of a record store operation
#[derive(Debug, Error)]
pub enum StoreError {
    /// A signing operation was attempted without a connected account
    #[error("Please connect wallet first")]
    NotConnected,

    /// The draft is missing a required field
    #[error(transparent)]
    Invalid(#[from] DraftError),

    /// No record is stored under the identifier
    #[error("News record not found: {0}")]
    NotFound(String),

    /// A stored payload could not be decoded
    #[error("corrupt payload under key '{key}': {source}")]
    Corrupt {
        /// Key of the unreadable entry
        key: String,
        /// Decoding error
        source: serde_json::Error,
    },

    /// A payload could not be encoded
    #[error("failed to encode payload: {0}")]
    Encode(serde_json::Error),

    /// The encryption capability failed
    #[error("encryption failed: {0}")]
    Encryption(String),

    /// The contract call failed
    #[error(transparent)]
    Contract(#[from] ContractError),
}

impl StoreError {
    /// Whether the user declined to sign
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Contract(ContractError::Rejected))
    }

    /// Whether the backend could not be reached
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Contract(ContractError::Unavailable))
    }
}
