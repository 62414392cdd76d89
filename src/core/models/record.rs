//! News record model
//!
//! A record is one submitted news item. Its identifier is not part of the
//! stored payload; it is the suffix of the key the payload lives under.

use serde::{Deserialize, Serialize};

use super::status::{RecordStatus, Verdict};

/// Highest score a fresh record can be assigned
pub const MAX_INITIAL_SCORE: u8 = 99;

/// A news record as presented to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsRecord {
    /// Client-generated identifier (`<unix-millis>-<suffix>`)
    pub id: String,

    /// Content after the encryption step (simulated, see `ContentCipher`)
    pub encrypted_content: String,

    /// Submission time in seconds since the Unix epoch
    pub timestamp: i64,

    /// Who published the news
    pub source: String,

    /// Free-text category, may be empty
    pub category: String,

    /// Credibility score, 0-100
    pub credibility_score: u8,

    /// Review status
    pub status: RecordStatus,
}

impl NewsRecord {
    /// Apply a review verdict, leaving every other field untouched
    pub fn apply(&mut self, verdict: Verdict) {
        self.status = verdict.status();
        self.credibility_score = verdict.score();
    }

    /// Submission time as a UTC date-time, if the timestamp is in range
    #[must_use]
    pub fn submitted_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp(self.timestamp, 0)
    }
}

/// Order records newest first
///
/// The sort is stable: records sharing a timestamp keep their input order,
/// so the result is deterministic for a given index.
pub fn sort_newest_first(records: &mut [NewsRecord]) {
    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}
