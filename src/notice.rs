//! Transient status notices
//!
//! Every user action ends in a short-lived banner: pending while it runs,
//! then success or error. Nothing is retried; the user re-runs the action.

use serde::Serialize;

use crate::error::StoreError;

/// How long a success notice stays visible
pub const SUCCESS_DISMISS_MS: u64 = 2_000;

/// How long an error notice stays visible
pub const ERROR_DISMISS_MS: u64 = 3_000;

/// Notice state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    /// Operation in flight
    Pending,
    /// Operation finished
    Success,
    /// Operation failed
    Error,
}

/// A transient, auto-dismissing status message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Notice state
    pub kind: NoticeKind,
    /// Message shown to the user
    pub message: String,
    /// Milliseconds before the notice dismisses itself (0 = until replaced)
    pub dismiss_after_ms: u64,
}

impl Notice {
    /// An in-flight notice
    #[must_use]
    pub fn pending(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Pending,
            message: message.into(),
            dismiss_after_ms: 0,
        }
    }

    /// A success notice
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
            dismiss_after_ms: SUCCESS_DISMISS_MS,
        }
    }

    /// An error notice
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
            dismiss_after_ms: ERROR_DISMISS_MS,
        }
    }

    /// Error notice for a failed action such as "Submission"
    ///
    /// A declined signature gets its own message; everything else reads
    /// `"<action> failed: <reason>"`.
    #[must_use]
    pub fn from_error(action: &str, err: &StoreError) -> Self {
        if err.is_rejected() {
            return Self::error("Transaction rejected by user");
        }
        Self::error(format!("{action} failed: {err}"))
    }

    /// Whether the notice reports a failure
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}
