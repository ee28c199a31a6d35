//! CLI library components for shelfview.

pub mod logging;
