//! newsproof - key-indexed news records on a key/value contract
//!
//! This library lists, submits and reviews news records stored on a contract
//! that only exposes `getData`/`setData`. An index entry emulates the
//! enumeration the contract lacks. Content "encryption" is a placeholder and
//! is labelled as such.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    unsafe_code
)]
#![warn(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod notice;
pub mod output;
pub mod paths;
