pub mod hand_builders;
pub mod records;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use records::RecordFile;
