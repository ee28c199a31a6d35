//! Scenario tests for the view-derivation engine, driven by the embedded
//! seed catalog.

use shelf_model::Catalog;
use shelf_view::{DisplayRow, FilterCriteria, derive_rows};

fn line_names(rows: &[DisplayRow]) -> Vec<&str> {
    rows.iter()
        .filter_map(|row| row.product().map(|p| p.name.as_str()))
        .collect()
}

fn header_categories(rows: &[DisplayRow]) -> Vec<&str> {
    rows.iter()
        .filter_map(|row| match row {
            DisplayRow::CategoryHeader { category } => Some(category.as_str()),
            DisplayRow::ProductLine { .. } => None,
        })
        .collect()
}

#[test]
fn no_criteria_shows_every_product_once() {
    let catalog = Catalog::seed();
    let rows = derive_rows(catalog.products(), &FilterCriteria::default());
    assert_eq!(line_names(&rows).len(), catalog.len());
    assert_eq!(header_categories(&rows), vec!["Fruits", "Vegetables"]);
}

#[test]
fn fruit_text_matches_only_fruit_names() {
    let catalog = Catalog::seed();
    let rows = derive_rows(catalog.products(), &FilterCriteria::new("fruit", false));
    assert_eq!(header_categories(&rows), vec!["Fruits"]);
    // "Apple" does not contain "fruit"; only the -fruit names match.
    assert_eq!(line_names(&rows), vec!["Dragonfruit", "Passionfruit"]);
    // First row is the header, immediately before the first matching line.
    assert_eq!(rows[0], DisplayRow::header("Fruits"));
}

#[test]
fn in_stock_only_drops_unstocked_products() {
    let catalog = Catalog::seed();
    let rows = derive_rows(catalog.products(), &FilterCriteria::new("", true));
    assert_eq!(header_categories(&rows), vec!["Fruits", "Vegetables"]);
    assert_eq!(line_names(&rows), vec!["Apple", "Dragonfruit", "Spinach", "Peas"]);
}

#[test]
fn unmatched_text_yields_no_rows() {
    let catalog = Catalog::seed();
    let rows = derive_rows(catalog.products(), &FilterCriteria::new("xyz", false));
    assert!(rows.is_empty());
}

#[test]
fn headers_precede_their_first_line() {
    let catalog = Catalog::seed();
    let rows = derive_rows(catalog.products(), &FilterCriteria::default());
    for pair in rows.windows(2) {
        if let DisplayRow::CategoryHeader { category } = &pair[0] {
            let product = pair[1].product().expect("header must be followed by a line");
            assert_eq!(&product.category, category);
        }
    }
    // A header is never the last row.
    assert!(!rows.last().expect("non-empty").is_header());
}

#[test]
fn derivation_is_idempotent() {
    let catalog = Catalog::seed();
    let criteria = FilterCriteria::new("p", true);
    let first = derive_rows(catalog.products(), &criteria);
    let second = derive_rows(catalog.products(), &criteria);
    assert_eq!(first, second);
}
