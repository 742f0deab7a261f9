//! Crosslink id resolution.
//!
//! # Invariants
//! - Dangling ids resolve to their raw id with `found == false`.
//! - With duplicated ids, the first matching record wins.

use crate::model::case::CaseRecord;
use std::collections::HashMap;

/// Display label of one crosslink target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrosslinkLabel {
    /// Target title, or the raw id when the target is missing.
    pub label: String,
    pub found: bool,
}

impl CrosslinkLabel {
    fn resolved(target: &CaseRecord) -> Self {
        Self {
            label: target.title.clone(),
            found: true,
        }
    }

    fn dangling(id: &str) -> Self {
        Self {
            label: id.to_string(),
            found: false,
        }
    }
}

/// Resolves `id` by linear scan over `records`.
pub fn resolve_crosslink(records: &[CaseRecord], id: &str) -> CrosslinkLabel {
    records
        .iter()
        .find(|record| record.id == id)
        .map_or_else(|| CrosslinkLabel::dangling(id), CrosslinkLabel::resolved)
}

/// Id→record index built once per dataset.
///
/// Resolves exactly like [`resolve_crosslink`] without the scan.
#[derive(Debug, Clone, Default)]
pub struct CrosslinkIndex {
    positions: HashMap<String, usize>,
}

impl CrosslinkIndex {
    pub fn build(records: &[CaseRecord]) -> Self {
        let mut positions = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            positions.entry(record.id.clone()).or_insert(position);
        }
        Self { positions }
    }

    /// Returns the record carrying `id`, if any.
    pub fn get<'a>(&self, records: &'a [CaseRecord], id: &str) -> Option<&'a CaseRecord> {
        self.positions
            .get(id)
            .and_then(|position| records.get(*position))
    }

    pub fn resolve(&self, records: &[CaseRecord], id: &str) -> CrosslinkLabel {
        self.get(records, id)
            .map_or_else(|| CrosslinkLabel::dangling(id), CrosslinkLabel::resolved)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{resolve_crosslink, CrosslinkIndex};
    use crate::model::case::{CaseRecord, CaseType};

    #[test]
    fn index_keeps_first_of_duplicated_ids() {
        let records = vec![
            CaseRecord::new("dup", CaseType::Hoax, "first"),
            CaseRecord::new("dup", CaseType::Hoax, "second"),
        ];
        let index = CrosslinkIndex::build(&records);

        assert_eq!(index.len(), 1);
        assert_eq!(index.resolve(&records, "dup").label, "first");
        assert_eq!(resolve_crosslink(&records, "dup").label, "first");
    }
}
