use cartography_core::{
    build_case_card, build_case_details, result_count_label, Catalog, CaseDates, CaseRecord,
    CaseType, CrosslinkChip, SourceLink, SourceRef, TypeFilter,
};

const CURRENT_YEAR: i32 = 2026;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn roswell() -> CaseRecord {
    let mut record = CaseRecord::new("roswell-1947", CaseType::Ufo, "Roswell Debris Recovery");
    record.confidence = "Documented".to_string();
    record.summary = "Ranch debris recovered near Roswell.".to_string();
    record.dates = Some(CaseDates::starting("1947-07-08"));
    record.tags = strings(&["debris", "military", "balloon", "press release", "retraction"]);
    record.entities = strings(&[
        "RAAF",
        "Project Mogul",
        "Marcel",
        "Brazel",
        "Blanchard",
        "Haut",
    ]);
    record.locations = strings(&["Roswell, NM", "USA"]);
    record.sources = vec![
        SourceRef {
            label: "USAF report".to_string(),
            url: Some("https://example.org/report".to_string()),
        },
        SourceRef {
            label: "Newspaper clipping".to_string(),
            url: None,
        },
    ];
    record.crosslinks = strings(&["project-blue-book", "majestic-12"]);
    record
}

fn catalog() -> Catalog {
    let blue_book = CaseRecord::new(
        "project-blue-book",
        CaseType::Government,
        "Project Blue Book",
    );
    let undated = CaseRecord::new("hessdalen", CaseType::Other, "Hessdalen Lights");
    Catalog::with_current_year(vec![roswell(), blue_book, undated], CURRENT_YEAR)
}

#[test]
fn card_caps_badges_and_entities() {
    let catalog = catalog();
    let visible = catalog.visible_records(&catalog.default_query_state());
    let card = build_case_card(&visible[0]);

    assert_eq!(card.id, "roswell-1947");
    assert_eq!(card.kind, CaseType::Ufo);
    assert_eq!(card.confidence, "Documented");
    assert_eq!(
        card.tag_badges,
        strings(&["debris", "military", "balloon", "press release"])
    );
    assert_eq!(
        card.entities_line.as_deref(),
        Some("RAAF · Project Mogul · Marcel · Brazel · Blanchard")
    );
    assert_eq!(card.locations_line.as_deref(), Some("Roswell, NM · USA"));
    assert_eq!(card.year_label, "1947");
}

#[test]
fn card_of_sparse_record_has_no_meta_lines() {
    let catalog = catalog();
    let mut state = catalog.default_query_state();
    state.type_filter = TypeFilter::Only(CaseType::Other);
    let visible = catalog.visible_records(&state);
    let card = build_case_card(&visible[0]);

    assert!(card.tag_badges.is_empty());
    assert_eq!(card.locations_line, None);
    assert_eq!(card.entities_line, None);
    assert_eq!(card.year_label, "—");
}

#[test]
fn details_resolve_sources_and_crosslinks() {
    let catalog = catalog();
    let details = build_case_details(&catalog, &roswell());

    assert_eq!(
        details.sources,
        vec![
            SourceLink {
                label: "USAF report".to_string(),
                href: "https://example.org/report".to_string(),
            },
            SourceLink {
                label: "Newspaper clipping".to_string(),
                href: "#".to_string(),
            },
        ]
    );
    assert_eq!(
        details.crosslinks,
        vec![
            CrosslinkChip {
                id: "project-blue-book".to_string(),
                label: "Project Blue Book".to_string(),
                found: true,
            },
            CrosslinkChip {
                id: "majestic-12".to_string(),
                label: "majestic-12".to_string(),
                found: false,
            },
        ]
    );
}

#[test]
fn following_a_chip_searches_for_its_label() {
    let catalog = catalog();
    let mut state = catalog.default_query_state();
    state.location_text = "nm".to_string();
    let details = build_case_details(&catalog, &roswell());

    let followed = details.crosslinks[0].follow(&state);
    assert_eq!(followed.keyword, "Project Blue Book");
    assert_eq!(followed.location_text, "nm");
    assert_eq!(followed.min_year, state.min_year);

    let visible = catalog.visible_records(&followed.with_keyword("project blue book"));
    assert!(visible.is_empty());

    let mut unrestricted = followed.clone();
    unrestricted.location_text.clear();
    let visible = catalog.visible_records(&unrestricted);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].record.id, "project-blue-book");
}

#[test]
fn result_count_label_matches_visible_count() {
    let catalog = catalog();
    let visible = catalog.visible_records(&catalog.default_query_state());
    assert_eq!(result_count_label(visible.len()), "3 results");
}
