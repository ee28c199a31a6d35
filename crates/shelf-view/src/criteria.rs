use serde::{Deserialize, Serialize};

/// The two pieces of true state in the pipeline: everything else the user
/// sees is derived from these plus the static catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring to match against product names.
    /// Empty matches every product.
    pub filter_text: String,
    /// When true, restrict to products with `stocked == true`.
    pub in_stock_only: bool,
}

impl FilterCriteria {
    pub fn new(filter_text: impl Into<String>, in_stock_only: bool) -> Self {
        Self {
            filter_text: filter_text.into(),
            in_stock_only,
        }
    }
}
