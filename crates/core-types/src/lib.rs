pub mod error;
pub mod records;

// Re-export the core types to provide a clean public API.
pub use error::CoreError;
pub use records::RawYearRecord;
