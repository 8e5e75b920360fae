//! Persistence contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define the store adapter contract the workbench mediates through.
//! - Isolate SQL details from synchronization orchestration.
//!
//! # Invariants
//! - Write paths validate records before SQL mutations.
//! - Mutations are all-or-nothing; a failed call leaves backend state
//!   unchanged.

pub mod content_store;
