//! Year derivation and dataset year bounds.
//!
//! # Invariants
//! - A date string contributes a year only when its first four characters
//!   parse as an integer; anything else counts as absent.
//! - Bounds always span at least `[FLOOR_YEAR, current year]`.

use crate::model::case::{CaseDates, CaseRecord};
use chrono::Datelike;

/// Lowest year the bounds are allowed to start from.
pub const FLOOR_YEAR: i32 = 1900;

const YEAR_PREFIX_CHARS: usize = 4;

/// Inclusive year range available across a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearBounds {
    pub min: i32,
    pub max: i32,
}

impl YearBounds {
    /// Returns whether `year` lies inside the inclusive range.
    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }
}

/// Derives the representative year of a date range.
///
/// Prefers `start`, falls back to `end`; returns `None` when neither yields
/// a parseable four-character prefix.
pub fn derive_year(dates: Option<&CaseDates>) -> Option<i32> {
    let dates = dates?;
    dates
        .start
        .as_deref()
        .and_then(year_prefix)
        .or_else(|| dates.end.as_deref().and_then(year_prefix))
}

/// Computes year bounds against the local calendar year.
pub fn compute_year_bounds(records: &[CaseRecord]) -> YearBounds {
    compute_year_bounds_at(records, current_year())
}

/// Computes year bounds against an explicit current year.
///
/// Zero years are discarded like absent ones.
pub fn compute_year_bounds_at(records: &[CaseRecord], current_year: i32) -> YearBounds {
    YearBounds {
        min: year_floor(records),
        max: dated_years(records)
            .max()
            .map_or(current_year, |year| year.max(current_year)),
    }
}

/// Lower bound of [`compute_year_bounds`], which needs no clock.
pub fn year_floor(records: &[CaseRecord]) -> i32 {
    dated_years(records)
        .min()
        .map_or(FLOOR_YEAR, |year| year.min(FLOOR_YEAR))
}

/// Current calendar year from the local clock.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

fn dated_years(records: &[CaseRecord]) -> impl Iterator<Item = i32> + '_ {
    records
        .iter()
        .filter_map(|record| derive_year(record.dates.as_ref()))
        .filter(|year| *year != 0)
}

fn year_prefix(raw: &str) -> Option<i32> {
    let prefix = raw.chars().take(YEAR_PREFIX_CHARS).collect::<String>();
    let trimmed = prefix.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i32>().ok()
}

#[cfg(test)]
mod tests {
    use super::{year_prefix, YearBounds};

    #[test]
    fn bounds_contain_both_ends() {
        let bounds = YearBounds {
            min: 2000,
            max: 2000,
        };
        assert!(bounds.contains(2000));
        assert!(!bounds.contains(1999));
        assert!(!bounds.contains(2001));
    }

    #[test]
    fn year_prefix_reads_first_four_chars() {
        assert_eq!(year_prefix("1947-07-08"), Some(1947));
        assert_eq!(year_prefix("1977"), Some(1977));
        assert_eq!(year_prefix("19"), Some(19));
    }

    #[test]
    fn year_prefix_rejects_non_numeric_and_blank() {
        assert_eq!(year_prefix("circa 1950"), None);
        assert_eq!(year_prefix("    2001"), None);
        assert_eq!(year_prefix(""), None);
    }

    #[test]
    fn year_prefix_counts_chars_not_bytes() {
        assert_eq!(year_prefix("ü947"), None);
        assert_eq!(year_prefix("-500-01-01"), Some(-500));
    }
}
