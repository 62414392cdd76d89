//! Randomness and time ports
//!
//! Record identifiers, initial scores and timestamps come from here so
//! tests can pin them.

use chrono::{DateTime, Utc};

/// Source of randomness for new records
pub trait Entropy: Send + Sync {
    /// Random suffix appended to record identifiers
    fn id_suffix(&self) -> String;

    /// Initial credibility score, expected in `0..=99`
    fn initial_score(&self) -> u8;
}

/// Source of the current time
pub trait Clock: Send + Sync {
    /// Current UTC time
    fn now(&self) -> DateTime<Utc>;
}
