use serde::{Deserialize, Serialize};

/// A single product record. Identity is the `name` field (assumed unique
/// within a catalog; not enforced).
///
/// `price` is kept as display text (e.g. "$2") rather than a numeric type:
/// the pipeline never computes with it, only renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub category: String,
    pub price: String,
    pub stocked: bool,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: impl Into<String>,
        stocked: bool,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price: price.into(),
            stocked,
        }
    }

    /// Name of the first required field that is empty, if any.
    pub(crate) fn missing_field(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            Some("name")
        } else if self.category.trim().is_empty() {
            Some("category")
        } else if self.price.trim().is_empty() {
            Some("price")
        } else {
            None
        }
    }
}
