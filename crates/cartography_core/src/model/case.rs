//! Case domain model.
//!
//! # Responsibility
//! - Define the canonical catalog record (a "case") and its nested parts.
//! - Keep the wire shape identical to the authored dataset document.
//!
//! # Invariants
//! - `id` is assumed unique across a dataset; uniqueness is not enforced here.
//! - `crosslinks` may reference ids missing from the dataset.
//! - Missing or `null` optional fields deserialize to empty values instead
//!   of failing.

use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Stable identifier of one case, as authored in the dataset.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type CaseId = String;

/// Fixed category set for catalog cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseType {
    #[serde(rename = "UFO")]
    Ufo,
    Government,
    Science,
    Folklore,
    Hoax,
    Media,
    Other,
}

impl CaseType {
    /// Returns every case type in declaration order.
    pub fn all() -> &'static [CaseType] {
        use CaseType::*;
        &[Ufo, Government, Science, Folklore, Hoax, Media, Other]
    }

    /// Returns the wire/display label, e.g. `UFO`.
    pub fn label(&self) -> &'static str {
        match self {
            CaseType::Ufo => "UFO",
            CaseType::Government => "Government",
            CaseType::Science => "Science",
            CaseType::Folklore => "Folklore",
            CaseType::Hoax => "Hoax",
            CaseType::Media => "Media",
            CaseType::Other => "Other",
        }
    }
}

impl Display for CaseType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CaseType {
    type Err = CaseTypeParseError;

    /// Parses an exact, case-sensitive label.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        CaseType::all()
            .iter()
            .copied()
            .find(|kind| kind.label() == value)
            .ok_or_else(|| CaseTypeParseError(value.to_string()))
    }
}

/// Unknown case type label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseTypeParseError(pub String);

impl Display for CaseTypeParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown case type `{}`; expected UFO|Government|Science|Folklore|Hoax|Media|Other",
            self.0
        )
    }
}

impl Error for CaseTypeParseError {}

/// Authored date range. Both ends are free-form date-like strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseDates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl CaseDates {
    /// Range with only a start date.
    pub fn starting(start: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            end: None,
        }
    }
}

/// Reference material attached to a case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Canonical catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub id: CaseId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    /// Serialized as `type` to match the dataset schema.
    #[serde(rename = "type")]
    pub kind: CaseType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub confidence: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<CaseDates>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub entities: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub locations: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sources: Vec<SourceRef>,
    /// Ids of related cases. Dangling ids are valid.
    #[serde(default, deserialize_with = "null_as_default")]
    pub crosslinks: Vec<CaseId>,
}

impl CaseRecord {
    /// Creates a record with empty optional fields.
    ///
    /// Used by tests and callers assembling records outside of a dataset file.
    pub fn new(id: impl Into<CaseId>, kind: CaseType, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            summary: String::new(),
            kind,
            confidence: String::new(),
            dates: None,
            tags: Vec::new(),
            entities: Vec::new(),
            locations: Vec::new(),
            sources: Vec::new(),
            crosslinks: Vec::new(),
        }
    }
}

/// Decodes an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
