//! Catalog ingestion from JSON or CSV files.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::info;

use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use crate::product::Product;

/// Load a product catalog from a file, dispatching on extension.
///
/// Supported formats:
/// - `.json`: an array of product objects
/// - `.csv`: header row `name,category,price,stocked`
///
/// The parsed records are validated through [`Catalog::new`], so a list
/// containing a malformed record is rejected as a whole.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let products = match extension.as_deref() {
        Some("json") => read_json(path)?,
        Some("csv") => read_csv(path)?,
        _ => {
            return Err(CatalogError::UnsupportedFormat(
                path.display().to_string(),
            ));
        }
    };
    info!(path = %path.display(), records = products.len(), "catalog loaded");
    Catalog::new(products)
}

fn read_json(path: &Path) -> Result<Vec<Product>> {
    let file = File::open(path)?;
    let products = serde_json::from_reader(BufReader::new(file))?;
    Ok(products)
}

fn read_csv(path: &Path) -> Result<Vec<Product>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    let mut products = Vec::new();
    for record in reader.deserialize() {
        let product: Product = record?;
        products.push(product);
    }
    Ok(products)
}
