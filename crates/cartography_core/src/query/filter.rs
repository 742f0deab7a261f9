//! Filter and sort pass over a case snapshot.
//!
//! # Responsibility
//! - Apply the year, type, keyword and location gates to every record.
//! - Order the surviving records by derived year, newest first.
//!
//! # Invariants
//! - Gates are conjunctive; blank keyword/location text always passes.
//! - Undated records use the bounds minimum for the year gate.
//! - Undated records sort after every dated record; ties keep input order.

use crate::model::case::{CaseRecord, CaseType, CaseTypeParseError};
use crate::query::year::{derive_year, year_floor, YearBounds};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const ALL_TYPES_LABEL: &str = "All";
const UNKNOWN_YEAR_LABEL: &str = "—";

/// Category gate of a query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TypeFilter {
    #[default]
    All,
    Only(CaseType),
}

impl TypeFilter {
    /// Selectable filter values: `All` first, then every case type.
    pub fn options() -> Vec<TypeFilter> {
        std::iter::once(TypeFilter::All)
            .chain(CaseType::all().iter().copied().map(TypeFilter::Only))
            .collect()
    }

    /// Returns whether a record of `kind` passes this gate.
    pub fn admits(&self, kind: CaseType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(expected) => *expected == kind,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TypeFilter::All => ALL_TYPES_LABEL,
            TypeFilter::Only(kind) => kind.label(),
        }
    }
}

impl Display for TypeFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TypeFilter {
    type Err = CaseTypeParseError;

    /// Exact, case-sensitive: `All` or one case type label.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == ALL_TYPES_LABEL {
            return Ok(TypeFilter::All);
        }
        value.parse::<CaseType>().map(TypeFilter::Only)
    }
}

/// Caller-controlled filter inputs for one query pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryState {
    /// Matched against title, summary, tags and entities.
    pub keyword: String,
    /// Matched against locations only.
    pub location_text: String,
    pub type_filter: TypeFilter,
    /// Inclusive lower year gate.
    pub min_year: i32,
    /// Inclusive upper year gate.
    pub max_year: i32,
}

impl QueryState {
    /// Unfiltered state spanning the full `bounds` range.
    pub fn for_bounds(bounds: YearBounds) -> Self {
        Self {
            keyword: String::new(),
            location_text: String::new(),
            type_filter: TypeFilter::All,
            min_year: bounds.min,
            max_year: bounds.max,
        }
    }

    /// Inclusive year gate as bounds.
    pub fn year_range(&self) -> YearBounds {
        YearBounds {
            min: self.min_year,
            max: self.max_year,
        }
    }

    /// Returns a copy with the keyword replaced.
    pub fn with_keyword(&self, keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            ..self.clone()
        }
    }
}

/// One record of a query result with its derived year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleCase<'a> {
    pub record: &'a CaseRecord,
    /// `None` when the record has no derivable year.
    pub year: Option<i32>,
}

impl VisibleCase<'_> {
    /// Year for display, or `—` when unknown.
    pub fn display_year(&self) -> String {
        display_year(self.year)
    }
}

/// Formats an optional derived year for display.
pub fn display_year(year: Option<i32>) -> String {
    year.map_or_else(|| UNKNOWN_YEAR_LABEL.to_string(), |year| year.to_string())
}

/// Filters and sorts `records` for `state`.
///
/// Derives the bounds minimum from `records` on every call; callers holding
/// precomputed bounds should use [`query_with_bounds`].
pub fn query<'a>(records: &'a [CaseRecord], state: &QueryState) -> Vec<VisibleCase<'a>> {
    run_query(records, year_floor(records), state)
}

/// Filters and sorts `records` using precomputed dataset bounds.
pub fn query_with_bounds<'a>(
    records: &'a [CaseRecord],
    bounds: YearBounds,
    state: &QueryState,
) -> Vec<VisibleCase<'a>> {
    run_query(records, bounds.min, state)
}

fn run_query<'a>(
    records: &'a [CaseRecord],
    undated_year: i32,
    state: &QueryState,
) -> Vec<VisibleCase<'a>> {
    let keyword = normalize_needle(&state.keyword);
    let location = normalize_needle(&state.location_text);

    let mut visible = records
        .iter()
        .map(|record| VisibleCase {
            record,
            year: derive_year(record.dates.as_ref()),
        })
        .filter(|case| {
            if !state.year_range().contains(case.year.unwrap_or(undated_year)) {
                return false;
            }
            if !state.type_filter.admits(case.record.kind) {
                return false;
            }
            contains_needle(&keyword_haystack(case.record), keyword.as_deref())
                && contains_needle(&location_haystack(case.record), location.as_deref())
        })
        .collect::<Vec<_>>();

    // `Option` orders `None` lowest, so reversing puts undated records last.
    // `sort_by` is stable.
    visible.sort_by(|a, b| b.year.cmp(&a.year));
    visible
}

/// Lower-cased searchable text for the keyword gate.
pub fn keyword_haystack(record: &CaseRecord) -> String {
    [
        record.title.as_str(),
        record.summary.as_str(),
        record.tags.join(" ").as_str(),
        record.entities.join(" ").as_str(),
    ]
    .join(" ")
    .to_lowercase()
}

/// Lower-cased searchable text for the location gate.
pub fn location_haystack(record: &CaseRecord) -> String {
    record.locations.join(" ").to_lowercase()
}

fn normalize_needle(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

fn contains_needle(haystack: &str, needle: Option<&str>) -> bool {
    needle.map_or(true, |needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::{contains_needle, keyword_haystack, normalize_needle, TypeFilter};
    use crate::model::case::{CaseRecord, CaseType};

    #[test]
    fn normalize_needle_trims_and_lowercases() {
        assert_eq!(normalize_needle("  Phoenix "), Some("phoenix".to_string()));
        assert_eq!(normalize_needle(" \t "), None);
    }

    #[test]
    fn blank_needle_always_matches() {
        assert!(contains_needle("", None));
        assert!(!contains_needle("", Some("x")));
    }

    #[test]
    fn keyword_haystack_joins_searchable_fields() {
        let mut record = CaseRecord::new("a", CaseType::Ufo, "Phoenix Lights");
        record.summary = "V-shaped formation".to_string();
        record.tags = vec!["Lights".to_string(), "Mass sighting".to_string()];
        record.entities = vec!["Fife Symington".to_string()];
        record.locations = vec!["Phoenix, AZ".to_string()];

        assert_eq!(
            keyword_haystack(&record),
            "phoenix lights v-shaped formation lights mass sighting fife symington"
        );
    }

    #[test]
    fn type_filter_parses_all_and_exact_labels() {
        assert_eq!("All".parse::<TypeFilter>(), Ok(TypeFilter::All));
        assert_eq!(
            "Hoax".parse::<TypeFilter>(),
            Ok(TypeFilter::Only(CaseType::Hoax))
        );
        assert!("all".parse::<TypeFilter>().is_err());
    }

    #[test]
    fn type_filter_options_start_with_all() {
        let options = TypeFilter::options();
        assert_eq!(options.len(), CaseType::all().len() + 1);
        assert_eq!(options[0], TypeFilter::All);
        assert_eq!(options[1], TypeFilter::Only(CaseType::Ufo));
    }
}
