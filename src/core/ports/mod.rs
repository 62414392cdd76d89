//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (contract storage, encryption, randomness, time).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core domain logic depends only on these traits, never on concrete
//! implementations. Tests swap in deterministic or failing implementations
//! without touching the store.

mod cipher;
mod contract;
mod entropy;

pub use cipher::ContentCipher;
pub use contract::{Contract, ContractBackend};
pub use entropy::{Clock, Entropy};
