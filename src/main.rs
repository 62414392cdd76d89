//! newsproof - submit, list and review news records on a key/value contract
//!
//! Records are indexed under a well-known key so they can be enumerated on a
//! contract without native enumeration. Content encryption is simulated.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    unsafe_code
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;
mod commands;

/// Main entry point for the newsproof CLI
fn main() {
    if let Err(e) = cli::run() {
        // Failures already shown as a notice are not printed twice
        if !e.is::<commands::Reported>() {
            eprintln!("Error: {e:#}");
        }
        std::process::exit(1);
    }
}
