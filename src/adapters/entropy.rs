//! Production randomness and clock

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::core::ports::{Clock, Entropy};

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random identifier suffix
pub const ID_SUFFIX_LEN: usize = 7;

/// Randomness from the thread-local generator
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadEntropy;

impl Entropy for ThreadEntropy {
    fn id_suffix(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..ID_SUFFIX_LEN)
            .map(|_| char::from(ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())]))
            .collect()
    }

    fn initial_score(&self) -> u8 {
        rand::thread_rng().gen_range(0..100)
    }
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
