//! List processing.
//!
//! - [`split`] - partition a provider list into upload-sized chunks
//! - [`verify`] - check chunk files against the canonical list

mod split;
mod verify;

// Re-export public types and functions
pub use split::{split_into_chunks, SplitError};
pub use verify::{verify_provider, VerifyReport};
