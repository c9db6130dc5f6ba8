//! Filesystem layer for the lists tree.
//!
//! This module handles all file-level concerns:
//! - [`paths`] - directory layout and provider discovery
//! - [`reader`] - reading canonical lists and chunk files
//! - [`writer`] - writing lists and chunks, with dry-run support

mod paths;
pub mod reader;
pub mod writer;

// Re-export public types and functions
pub use paths::Layout;
