pub mod catalog;
pub mod error;
pub mod load;
pub mod product;

pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use load::load_catalog;
pub use product::Product;
