//! Dashboard statistics over a set of records

use serde::Serialize;

use crate::core::models::{NewsRecord, RecordStatus};

/// Upper bounds (inclusive) of the credibility distribution buckets
pub const BUCKET_UPPER_BOUNDS: [u8; 5] = [20, 40, 60, 80, 100];

/// Aggregate view of the record collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    /// Number of records
    pub total: usize,
    /// Records awaiting review
    pub pending: usize,
    /// Verified records
    pub verified: usize,
    /// Disputed records
    pub disputed: usize,
    /// Mean credibility score, 0.0 when there are no records
    pub average_credibility: f64,
    /// Record counts per score bucket: 0-20, 21-40, 41-60, 61-80, 81-100
    pub distribution: [usize; 5],
}

impl Stats {
    /// Average credibility rounded to one decimal, as shown on the dashboard
    #[must_use]
    pub fn average_display(&self) -> String {
        format!("{:.1}", self.average_credibility)
    }

    /// Count for a status
    #[must_use]
    pub const fn count(&self, status: RecordStatus) -> usize {
        match status {
            RecordStatus::Pending => self.pending,
            RecordStatus::Verified => self.verified,
            RecordStatus::Disputed => self.disputed,
        }
    }
}

/// Bucket index for a credibility score
#[must_use]
pub fn bucket_for(score: u8) -> usize {
    BUCKET_UPPER_BOUNDS
        .iter()
        .position(|&upper| score <= upper)
        .unwrap_or(BUCKET_UPPER_BOUNDS.len() - 1)
}

/// Summarize records for the dashboard
#[must_use]
pub fn summarize(records: &[NewsRecord]) -> Stats {
    let mut stats = Stats {
        total: records.len(),
        pending: 0,
        verified: 0,
        disputed: 0,
        average_credibility: 0.0,
        distribution: [0; 5],
    };

    let mut score_sum = 0u64;
    for record in records {
        match record.status {
            RecordStatus::Pending => stats.pending += 1,
            RecordStatus::Verified => stats.verified += 1,
            RecordStatus::Disputed => stats.disputed += 1,
        }
        score_sum += u64::from(record.credibility_score);
        stats.distribution[bucket_for(record.credibility_score)] += 1;
    }

    if !records.is_empty() {
        #[allow(clippy::cast_precision_loss)]
        {
            stats.average_credibility = score_sum as f64 / records.len() as f64;
        }
    }

    stats
}
