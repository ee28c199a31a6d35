//! The view-derivation engine: (products, criteria) -> display rows.

use shelf_model::Product;

use crate::criteria::FilterCriteria;
use crate::rows::DisplayRow;

/// Derive the ordered row sequence for a product list under the given
/// criteria.
///
/// Filtering keeps products whose name contains `filter_text`
/// (case-insensitive; empty text matches all) and, when `in_stock_only` is
/// set, whose `stocked` flag is true. Source order is preserved.
///
/// Headers come from a single pass over the filtered sequence: whenever the
/// category changes relative to the previous emitted product, a
/// `CategoryHeader` is emitted first. Products of the same category that are
/// non-contiguous in the source therefore repeat their header; the input is
/// deliberately not grouped or sorted.
///
/// Pure: no side effects, identical inputs yield value-identical outputs.
pub fn derive_rows(products: &[Product], criteria: &FilterCriteria) -> Vec<DisplayRow> {
    let needle = criteria.filter_text.to_lowercase();
    let mut rows = Vec::new();
    let mut last_category: Option<&str> = None;
    for product in products {
        if !matches_text(product, &needle) {
            continue;
        }
        if criteria.in_stock_only && !product.stocked {
            continue;
        }
        if last_category != Some(product.category.as_str()) {
            rows.push(DisplayRow::header(product.category.clone()));
        }
        rows.push(DisplayRow::line(product.clone()));
        last_category = Some(&product.category);
    }
    rows
}

fn matches_text(product: &Product, needle_lower: &str) -> bool {
    needle_lower.is_empty() || product.name.to_lowercase().contains(needle_lower)
}
