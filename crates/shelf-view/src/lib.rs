pub mod criteria;
pub mod derive;
pub mod rows;
pub mod session;

pub use criteria::FilterCriteria;
pub use derive::derive_rows;
pub use rows::DisplayRow;
pub use session::FilterSession;
