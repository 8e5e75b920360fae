//! Domain model for authored post fragments.
//!
//! # Responsibility
//! - Define the canonical content record shared by store and workbench.
//!
//! # Invariants
//! - A record's `id` is store-assigned and immutable once present.
//! - Theme designators appear on theme records and nowhere else.

pub mod content;
