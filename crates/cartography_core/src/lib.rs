//! Core catalog logic for Shadow Cartography.
//! This crate is the single source of truth for catalog query invariants.

pub mod dataset;
pub mod logging;
pub mod model;
pub mod query;
pub mod service;

pub use dataset::{load_cases, parse_cases, DatasetError, DatasetResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::case::{CaseDates, CaseId, CaseRecord, CaseType, CaseTypeParseError, SourceRef};
pub use query::crosslink::{resolve_crosslink, CrosslinkIndex, CrosslinkLabel};
pub use query::filter::{
    display_year, query, query_with_bounds, QueryState, TypeFilter, VisibleCase,
};
pub use query::year::{
    compute_year_bounds, compute_year_bounds_at, derive_year, YearBounds, FLOOR_YEAR,
};
pub use service::card_service::{
    build_case_card, build_case_details, result_count_label, CaseCard, CaseDetails, CrosslinkChip,
    SourceLink,
};
pub use service::catalog_service::Catalog;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
