use serde::Serialize;

use shelf_model::Product;

/// One row of the rendered table: either a category header or a product
/// line. Produced fresh on every derivation and consumed by the renderer;
/// never cached or mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayRow {
    CategoryHeader { category: String },
    ProductLine { product: Product },
}

impl DisplayRow {
    pub fn header(category: impl Into<String>) -> Self {
        Self::CategoryHeader {
            category: category.into(),
        }
    }

    pub fn line(product: Product) -> Self {
        Self::ProductLine { product }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, Self::CategoryHeader { .. })
    }

    /// The product carried by a `ProductLine`, if this is one.
    pub fn product(&self) -> Option<&Product> {
        match self {
            Self::ProductLine { product } => Some(product),
            Self::CategoryHeader { .. } => None,
        }
    }
}
