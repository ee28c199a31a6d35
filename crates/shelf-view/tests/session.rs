//! Tests for the FilterSession update contract.

use shelf_model::Catalog;
use shelf_view::{DisplayRow, FilterCriteria, FilterSession};

#[test]
fn construction_derives_once() {
    let session = FilterSession::new(Catalog::seed(), FilterCriteria::default());
    assert_eq!(session.derivation_count(), 1);
    assert_eq!(session.rows().len(), 8); // 2 headers + 6 lines
}

#[test]
fn each_update_triggers_exactly_one_derivation() {
    let mut session = FilterSession::new(Catalog::seed(), FilterCriteria::default());
    session.set_filter_text("fruit");
    assert_eq!(session.derivation_count(), 2);
    session.set_in_stock_only(true);
    assert_eq!(session.derivation_count(), 3);
    session.set_filter_text("fruit");
    // No change detection: a redundant update still re-derives once.
    assert_eq!(session.derivation_count(), 4);
}

#[test]
fn rows_reflect_the_latest_criteria() {
    let mut session = FilterSession::new(Catalog::seed(), FilterCriteria::new("fruit", false));
    session.set_in_stock_only(true);
    let names: Vec<&str> = session
        .rows()
        .iter()
        .filter_map(|row| row.product().map(|p| p.name.as_str()))
        .collect();
    // Dragonfruit is the only stocked product whose name contains "fruit".
    assert_eq!(names, vec!["Dragonfruit"]);
    assert_eq!(session.rows()[0], DisplayRow::header("Fruits"));

    session.set_filter_text("");
    assert_eq!(session.criteria(), &FilterCriteria::new("", true));
    assert_eq!(session.rows().len(), 6); // 2 headers + 4 stocked lines
}

#[test]
fn clearing_the_filter_restores_the_full_listing() {
    let mut session = FilterSession::new(Catalog::seed(), FilterCriteria::new("xyz", false));
    assert!(session.rows().is_empty());
    session.set_filter_text("");
    let line_count = session.rows().iter().filter(|r| !r.is_header()).count();
    assert_eq!(line_count, session.catalog().len());
}
