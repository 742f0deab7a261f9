//! Card projections for visible cases.
//!
//! # Responsibility
//! - Derive presentation-ready summaries (badges, meta lines, year label).
//! - Derive detail panels (source links, crosslink chips).
//!
//! # Invariants
//! - Projections never drop a visible record and never reorder results.
//! - Missing source urls render as `#`.
//! - Dangling crosslinks render with their raw id.

use crate::model::case::{CaseId, CaseRecord, CaseType, SourceRef};
use crate::query::filter::{QueryState, VisibleCase};
use crate::service::catalog_service::Catalog;

/// Number of tags shown as badges on a card.
pub const CARD_TAG_LIMIT: usize = 4;
/// Number of entities shown on a card meta line.
pub const CARD_ENTITY_LIMIT: usize = 5;

const META_SEPARATOR: &str = " · ";
const MISSING_SOURCE_HREF: &str = "#";

/// Summary projection of one visible case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseCard {
    pub id: CaseId,
    pub title: String,
    pub kind: CaseType,
    pub confidence: String,
    /// First tags, capped at [`CARD_TAG_LIMIT`].
    pub tag_badges: Vec<String>,
    pub summary: String,
    /// All locations joined; `None` when the case has none.
    pub locations_line: Option<String>,
    /// First entities joined, capped at [`CARD_ENTITY_LIMIT`].
    pub entities_line: Option<String>,
    /// Derived year or `—`.
    pub year_label: String,
}

/// Source entry ready for linking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLink {
    pub label: String,
    pub href: String,
}

/// Resolved reference to another case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrosslinkChip {
    pub id: CaseId,
    pub label: String,
    pub found: bool,
}

impl CrosslinkChip {
    /// Query state after following this chip: the keyword becomes the label.
    pub fn follow(&self, state: &QueryState) -> QueryState {
        state.with_keyword(self.label.clone())
    }
}

/// Expanded detail panel of one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseDetails {
    pub sources: Vec<SourceLink>,
    pub crosslinks: Vec<CrosslinkChip>,
}

/// Builds the summary card of a visible case.
pub fn build_case_card(case: &VisibleCase<'_>) -> CaseCard {
    let record = case.record;
    CaseCard {
        id: record.id.clone(),
        title: record.title.clone(),
        kind: record.kind,
        confidence: record.confidence.clone(),
        tag_badges: record.tags.iter().take(CARD_TAG_LIMIT).cloned().collect(),
        summary: record.summary.clone(),
        locations_line: join_meta(&record.locations, record.locations.len()),
        entities_line: join_meta(&record.entities, CARD_ENTITY_LIMIT),
        year_label: case.display_year(),
    }
}

/// Builds the detail panel of `record`, resolving crosslinks through `catalog`.
pub fn build_case_details(catalog: &Catalog, record: &CaseRecord) -> CaseDetails {
    CaseDetails {
        sources: record.sources.iter().map(source_link).collect(),
        crosslinks: record
            .crosslinks
            .iter()
            .map(|id| {
                let resolved = catalog.resolve_crosslink(id);
                CrosslinkChip {
                    id: id.clone(),
                    label: resolved.label,
                    found: resolved.found,
                }
            })
            .collect(),
    }
}

/// Result count caption, e.g. `1 result` or `3 results`.
pub fn result_count_label(count: usize) -> String {
    if count == 1 {
        "1 result".to_string()
    } else {
        format!("{count} results")
    }
}

fn source_link(source: &SourceRef) -> SourceLink {
    SourceLink {
        label: source.label.clone(),
        href: source
            .url
            .clone()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| MISSING_SOURCE_HREF.to_string()),
    }
}

fn join_meta(values: &[String], limit: usize) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    Some(
        values
            .iter()
            .take(limit)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(META_SEPARATOR),
    )
}
