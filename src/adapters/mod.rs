//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `contract/` - Memory and JSON-file contract storage
//! - `cipher` - Base64 placeholder for the encryption step
//! - `entropy` - Thread RNG and system clock

pub mod cipher;
pub mod contract;
pub mod entropy;

pub use cipher::PlaceholderCipher;
pub use contract::{FileContract, MemoryContract, open_contract};
pub use entropy::{SystemClock, ThreadEntropy};

use crate::core::ports::Contract;
use crate::core::services::{RecordStore, StoreOptions};

/// Wire a record store with the production cipher, randomness and clock
#[must_use]
pub fn record_store(contract: Box<dyn Contract>, options: StoreOptions) -> RecordStore {
    RecordStore::new(
        contract,
        Box::new(PlaceholderCipher),
        Box::new(ThreadEntropy),
        Box::new(SystemClock),
    )
    .with_options(options)
}
