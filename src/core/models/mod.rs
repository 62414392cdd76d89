//! Domain models for newsproof
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`NewsRecord`] - A submitted news item
//! - [`RecordStatus`] / [`Verdict`] - Review state and review outcomes
//! - [`NewsDraft`] - What a user submits
//! - [`Session`] - The connected account
//! - [`payload`] - Wire encoding of record and index entries

mod draft;
pub mod payload;
mod record;
mod session;
mod status;

pub use draft::{DraftError, NewsDraft};
pub use payload::RecordIndex;
pub use record::{MAX_INITIAL_SCORE, NewsRecord, sort_newest_first};
pub use session::Session;
pub use status::{DISPUTED_SCORE, RecordStatus, VERIFIED_SCORE, Verdict};
