// Value extraction utilities
pub mod dates;

pub use dates::extract_deadline_dates;
