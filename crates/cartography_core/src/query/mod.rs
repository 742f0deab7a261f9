//! Catalog query engine.
//!
//! # Responsibility
//! - Derive representative years and dataset-wide year bounds.
//! - Filter and order records for a given query state.
//! - Resolve crosslink ids into display labels.
//!
//! # Invariants
//! - Every function here is pure: no I/O, no mutation of inputs.
//! - Degenerate inputs degrade to fallback values; nothing returns an error.

pub mod crosslink;
pub mod filter;
pub mod year;
