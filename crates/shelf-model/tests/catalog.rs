//! Tests for catalog ingestion and validation.

use std::io::Write;

use shelf_model::{CatalogError, Product, load_catalog};

fn write_temp(extension: &str, contents: &str) -> tempfile::TempPath {
    let mut file = tempfile::Builder::new()
        .suffix(&format!(".{extension}"))
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.into_temp_path()
}

#[test]
fn loads_json_catalog() {
    let path = write_temp(
        "json",
        r#"[
            {"name": "Apple", "category": "Fruits", "price": "$1", "stocked": true},
            {"name": "Peas", "category": "Vegetables", "price": "$1", "stocked": false}
        ]"#,
    );
    let catalog = load_catalog(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.products()[0].name, "Apple");
    assert!(!catalog.products()[1].stocked);
}

#[test]
fn loads_csv_catalog() {
    let path = write_temp(
        "csv",
        "name,category,price,stocked\n\
         Apple,Fruits,$1,true\n\
         Pumpkin,Vegetables,$4,false\n",
    );
    let catalog = load_catalog(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.products()[1].category, "Vegetables");
    assert_eq!(catalog.categories(), vec!["Fruits", "Vegetables"]);
}

#[test]
fn rejects_json_with_missing_field() {
    let path = write_temp(
        "json",
        r#"[{"name": "Apple", "category": "Fruits", "stocked": true}]"#,
    );
    let error = load_catalog(&path).unwrap_err();
    assert!(matches!(error, CatalogError::Json(_)));
}

#[test]
fn rejects_json_with_empty_category() {
    let path = write_temp(
        "json",
        r#"[{"name": "Apple", "category": "", "price": "$1", "stocked": true}]"#,
    );
    let error = load_catalog(&path).unwrap_err();
    assert!(matches!(
        error,
        CatalogError::InvalidRecord { index: 0, field: "category" }
    ));
}

#[test]
fn rejects_unknown_extension() {
    let path = write_temp("toml", "name = \"Apple\"");
    let error = load_catalog(&path).unwrap_err();
    assert!(matches!(error, CatalogError::UnsupportedFormat(_)));
}

#[test]
fn product_json_round_trips() {
    let product = Product::new("Spinach", "Vegetables", "$2", true);
    let json = serde_json::to_string(&product).expect("serialize product");
    let round: Product = serde_json::from_str(&json).expect("deserialize product");
    assert_eq!(round, product);
}
