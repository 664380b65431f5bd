//! Batch processing orchestration.

pub mod sheet;

pub use sheet::generate_sheets;
