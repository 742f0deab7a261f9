//! Core use-case services.
//!
//! # Responsibility
//! - Wrap the pure query engine around one owned dataset snapshot.
//! - Shape visible records into presentation projections.
//! - Keep CLI/UI layers decoupled from query internals.

pub mod card_service;
pub mod catalog_service;
