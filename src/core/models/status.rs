//! Record status and review verdicts
//!
//! A record starts out `pending`. Reviewers move it to `verified` or
//! `disputed`; both states can be re-entered and nothing is terminal.

use serde::{Deserialize, Serialize};

/// Credibility score written when a record is verified
pub const VERIFIED_SCORE: u8 = 95;

/// Credibility score written when a record is disputed
pub const DISPUTED_SCORE: u8 = 25;

/// Review status of a news record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    /// Submitted, not yet reviewed
    #[default]
    Pending,
    /// Confirmed by a reviewer
    Verified,
    /// Challenged by a reviewer
    Disputed,
}

impl RecordStatus {
    /// All statuses, in lifecycle order
    pub const ALL: [Self; 3] = [Self::Pending, Self::Verified, Self::Disputed];

    /// Wire name of the status
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Disputed => "disputed",
        }
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RecordStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "verified" => Ok(Self::Verified),
            "disputed" => Ok(Self::Disputed),
            _ => Err(format!("Invalid status: {s}. Use: pending, verified, disputed")),
        }
    }
}

/// Outcome of reviewing a record
///
/// Each verdict overwrites the status and the credibility score with fixed
/// values, whatever the record's previous state was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Mark the record as verified
    Verify,
    /// Mark the record as disputed
    Dispute,
}

impl Verdict {
    /// Status written by this verdict
    #[must_use]
    pub const fn status(self) -> RecordStatus {
        match self {
            Self::Verify => RecordStatus::Verified,
            Self::Dispute => RecordStatus::Disputed,
        }
    }

    /// Credibility score written by this verdict
    #[must_use]
    pub const fn score(self) -> u8 {
        match self {
            Self::Verify => VERIFIED_SCORE,
            Self::Dispute => DISPUTED_SCORE,
        }
    }

    /// Label used in user-facing notices
    #[must_use]
    pub const fn action(self) -> &'static str {
        match self {
            Self::Verify => "Verification",
            Self::Dispute => "Dispute processing",
        }
    }
}
