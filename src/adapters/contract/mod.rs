//! Contract adapters
//!
//! Implements `Contract` using:
//! - `memory` - an in-process map (tests, throwaway sessions)
//! - `file` - a JSON file standing in for on-chain storage

mod file;
mod memory;

use std::path::Path;

pub use file::FileContract;
pub use memory::MemoryContract;

use crate::core::ports::{Contract, ContractBackend};

/// Open the configured contract backend
#[must_use]
pub fn open_contract(backend: ContractBackend, path: &Path) -> Box<dyn Contract> {
    match backend {
        ContractBackend::File => Box::new(FileContract::new(path)),
        ContractBackend::Memory => Box::new(MemoryContract::new()),
    }
}
