//! Catalog domain model.
//!
//! # Responsibility
//! - Define the canonical case record shape shared by query and projection code.
//!
//! # Invariants
//! - Records are immutable snapshots; nothing in core mutates them.
//! - Optional collections deserialize as empty, never as errors.

pub mod case;
