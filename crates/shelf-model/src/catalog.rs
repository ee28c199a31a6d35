use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::product::Product;

/// An immutable, ordered product list, validated at construction.
///
/// Ordering is significant: the view layer derives category headers from
/// runs of adjacent categories, so the catalog preserves insertion order and
/// never re-sorts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Validate and wrap a product list. Fails on the first record with a
    /// missing required field; the whole list is rejected in that case.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        for (index, product) in products.iter().enumerate() {
            if let Some(field) = product.missing_field() {
                return Err(CatalogError::InvalidRecord { index, field });
            }
        }
        debug!(records = products.len(), "catalog constructed");
        Ok(Self { products })
    }

    /// The six embedded demo records spanning two categories.
    pub fn seed() -> Self {
        let products = vec![
            Product::new("Apple", "Fruits", "$1", true),
            Product::new("Dragonfruit", "Fruits", "$1", true),
            Product::new("Passionfruit", "Fruits", "$2", false),
            Product::new("Spinach", "Vegetables", "$2", true),
            Product::new("Pumpkin", "Vegetables", "$4", false),
            Product::new("Peas", "Vegetables", "$1", true),
        ];
        // Seed records are well-formed by construction.
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct categories in first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(&product.category);
            }
        }
        seen
    }
}
