use cartography_core::{resolve_crosslink, Catalog, CaseRecord, CaseType, CrosslinkLabel};

fn records() -> Vec<CaseRecord> {
    let mut roswell = CaseRecord::new("roswell-1947", CaseType::Ufo, "Roswell Debris Recovery");
    roswell.crosslinks = vec!["project-blue-book".to_string(), "nonexistent-id".to_string()];
    let blue_book = CaseRecord::new(
        "project-blue-book",
        CaseType::Government,
        "Project Blue Book",
    );
    vec![roswell, blue_book]
}

#[test]
fn resolves_existing_id_to_title() {
    let label = resolve_crosslink(&records(), "project-blue-book");
    assert_eq!(
        label,
        CrosslinkLabel {
            label: "Project Blue Book".to_string(),
            found: true,
        }
    );
}

#[test]
fn dangling_id_falls_back_to_raw_id() {
    let label = resolve_crosslink(&records(), "nonexistent-id");
    assert_eq!(
        label,
        CrosslinkLabel {
            label: "nonexistent-id".to_string(),
            found: false,
        }
    );
}

#[test]
fn id_match_is_exact() {
    let label = resolve_crosslink(&records(), "Project-Blue-Book");
    assert!(!label.found);
}

#[test]
fn catalog_index_resolves_like_linear_scan() {
    let records = records();
    let catalog = Catalog::with_current_year(records.clone(), 2026);

    for id in ["roswell-1947", "project-blue-book", "nonexistent-id", ""] {
        assert_eq!(catalog.resolve_crosslink(id), resolve_crosslink(&records, id));
    }
    assert_eq!(
        catalog.get("roswell-1947").map(|record| record.title.as_str()),
        Some("Roswell Debris Recovery")
    );
    assert!(catalog.get("nonexistent-id").is_none());
}
