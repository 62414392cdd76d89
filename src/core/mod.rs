//! Core domain logic for newsproof
//!
//! This module contains the record store and its domain types. All external
//! interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`NewsRecord`, `RecordStatus`, `Session`)
//! - `services/` - The record store and dashboard statistics
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
