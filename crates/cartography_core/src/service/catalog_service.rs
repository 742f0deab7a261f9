//! Catalog use-case service.
//!
//! # Responsibility
//! - Own one immutable dataset snapshot.
//! - Memoize dataset-wide year bounds and the crosslink index.
//! - Expose query, bounds and crosslink APIs to presentation callers.
//!
//! # Invariants
//! - Year bounds are derived at most once per catalog.
//! - Query results are recomputed per call and never cached across states.
//! - Logging is metadata-only; query text is never logged.

use crate::model::case::CaseRecord;
use crate::query::crosslink::{CrosslinkIndex, CrosslinkLabel};
use crate::query::filter::{query_with_bounds, QueryState, VisibleCase};
use crate::query::year::{compute_year_bounds_at, current_year, YearBounds};
use log::{debug, info};
use once_cell::sync::OnceCell;
use std::time::Instant;

/// Read-only catalog over a loaded case snapshot.
#[derive(Debug)]
pub struct Catalog {
    records: Vec<CaseRecord>,
    index: CrosslinkIndex,
    current_year: i32,
    bounds: OnceCell<YearBounds>,
}

impl Catalog {
    /// Creates a catalog whose bounds extend to the local calendar year.
    pub fn new(records: Vec<CaseRecord>) -> Self {
        Self::with_current_year(records, current_year())
    }

    /// Creates a catalog with an explicit "current year" for bounds.
    ///
    /// Used by tests and callers that pin the clock.
    pub fn with_current_year(records: Vec<CaseRecord>, current_year: i32) -> Self {
        let index = CrosslinkIndex::build(&records);
        info!(
            "event=catalog_open module=service status=ok records={} indexed_ids={}",
            records.len(),
            index.len()
        );
        Self {
            records,
            index,
            current_year,
            bounds: OnceCell::new(),
        }
    }

    /// All records in dataset order.
    pub fn records(&self) -> &[CaseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Dataset-wide year bounds, derived on first access.
    pub fn year_bounds(&self) -> YearBounds {
        *self
            .bounds
            .get_or_init(|| compute_year_bounds_at(&self.records, self.current_year))
    }

    /// Initial viewer state: no text filters, all types, full year range.
    pub fn default_query_state(&self) -> QueryState {
        QueryState::for_bounds(self.year_bounds())
    }

    /// Filtered, newest-first records for `state`.
    pub fn visible_records(&self, state: &QueryState) -> Vec<VisibleCase<'_>> {
        let started_at = Instant::now();
        let visible = query_with_bounds(&self.records, self.year_bounds(), state);
        debug!(
            "event=catalog_query module=service status=ok duration_us={} total={} visible={} type={} min_year={} max_year={}",
            started_at.elapsed().as_micros(),
            self.records.len(),
            visible.len(),
            state.type_filter,
            state.min_year,
            state.max_year
        );
        visible
    }

    /// Looks up a record by exact id.
    pub fn get(&self, id: &str) -> Option<&CaseRecord> {
        self.index.get(&self.records, id)
    }

    /// Resolves a crosslink id into its display label.
    pub fn resolve_crosslink(&self, id: &str) -> CrosslinkLabel {
        self.index.resolve(&self.records, id)
    }
}
