//! Session context
//!
//! Holds the connected wallet account. Operations that sign writes take a
//! `&Session` instead of reading ambient state.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// A user session, connected or not
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    account: Option<String>,
}

impl Session {
    /// A session with no account
    #[must_use]
    pub const fn disconnected() -> Self {
        Self { account: None }
    }

    /// A session connected to `account`
    #[must_use]
    pub fn connected(account: impl Into<String>) -> Self {
        let mut session = Self::disconnected();
        session.connect(account);
        session
    }

    /// Switch to `account`; an empty address disconnects
    pub fn connect(&mut self, account: impl Into<String>) {
        let account = account.into();
        let account = account.trim();
        self.account = (!account.is_empty()).then(|| account.to_string());
    }

    /// Drop the account
    pub fn disconnect(&mut self) {
        self.account = None;
    }

    /// The connected account, if any
    #[must_use]
    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    /// Whether an account is connected
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    /// The connected account, or `NotConnected`
    pub fn require_account(&self) -> Result<&str, StoreError> {
        self.account().ok_or(StoreError::NotConnected)
    }
}
