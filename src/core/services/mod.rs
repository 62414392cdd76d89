//! Business logic services
//!
//! - [`record_store`] - List, submit and review key-indexed records
//! - [`stats`] - Dashboard statistics over a record set

pub mod record_store;
pub mod stats;

pub use record_store::{DEFAULT_INDEX_KEY, DEFAULT_RECORD_PREFIX, RecordStore, StoreOptions};
pub use stats::{Stats, summarize};
