use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// A product record is unusable: a required field is missing or empty.
    /// Ingestion fails fast on the first such record; a partially valid
    /// catalog is never constructed.
    #[error("invalid record at index {index}: missing required field `{field}`")]
    InvalidRecord { index: usize, field: &'static str },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed product json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed product csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("unsupported catalog format: {0} (expected .json or .csv)")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
