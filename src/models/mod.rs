//! Domain models for the IP list chunker.
//!
//! This module contains the core data structures used throughout the tool:
//! - [`Cidr`] - IPv4 network in CIDR notation
//! - [`ProviderList`] - canonical CIDR list for one provider
//! - [`Chunk`] - bounded-size, order-preserving slice of a provider list

mod chunk;
mod cidr;
mod provider;

// Re-export public types
pub use chunk::{chunk_file_name, Chunk};
pub use cidr::{Cidr, MAX_PREFIX_LEN};
pub use provider::ProviderList;
