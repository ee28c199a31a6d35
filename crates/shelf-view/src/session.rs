use tracing::debug;

use shelf_model::Catalog;

use crate::criteria::FilterCriteria;
use crate::derive::derive_rows;
use crate::rows::DisplayRow;

/// Holds the catalog and the current filter criteria, re-deriving the row
/// sequence synchronously on every update.
///
/// Each setter replaces its field and triggers exactly one derivation, so
/// the rows observed through [`rows`](Self::rows) are never stale. There is
/// no batching or debouncing.
#[derive(Debug)]
pub struct FilterSession {
    catalog: Catalog,
    criteria: FilterCriteria,
    rows: Vec<DisplayRow>,
    derivations: u64,
}

impl FilterSession {
    pub fn new(catalog: Catalog, criteria: FilterCriteria) -> Self {
        let mut session = Self {
            catalog,
            criteria,
            rows: Vec::new(),
            derivations: 0,
        };
        session.rederive();
        session
    }

    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.criteria.filter_text = text.into();
        self.rederive();
    }

    pub fn set_in_stock_only(&mut self, flag: bool) {
        self.criteria.in_stock_only = flag;
        self.rederive();
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Number of derivations performed since construction. Diagnostic for
    /// the one-derivation-per-update contract.
    pub fn derivation_count(&self) -> u64 {
        self.derivations
    }

    fn rederive(&mut self) {
        self.rows = derive_rows(self.catalog.products(), &self.criteria);
        self.derivations += 1;
        debug!(
            filter_text = %self.criteria.filter_text,
            in_stock_only = self.criteria.in_stock_only,
            rows = self.rows.len(),
            "rows derived"
        );
    }
}
