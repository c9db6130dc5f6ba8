//! Terminal output.

pub mod report;

// Re-export public types
pub use report::CountRow;
