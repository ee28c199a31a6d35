//! Rendering collaborators: terminal table and JSON output of derived rows.

pub mod json;
pub mod table;

pub use json::rows_to_json;
pub use table::render_table;
