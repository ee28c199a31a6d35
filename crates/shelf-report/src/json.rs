use anyhow::{Context, Result};

use shelf_view::DisplayRow;

/// Serialize a derived row sequence as pretty JSON for machine consumption.
pub fn rows_to_json(rows: &[DisplayRow]) -> Result<String> {
    serde_json::to_string_pretty(rows).context("serialize display rows")
}
