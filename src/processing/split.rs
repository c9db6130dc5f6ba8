//! Provider list splitting.
//!
//! Entra ID named locations cap the number of IP ranges a single location
//! can hold, so canonical provider lists are split into upload-sized parts.

use crate::models::Chunk;
use std::error::Error;
use std::fmt;

/// Precondition failures of [`split_into_chunks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitError {
    /// The entry list was empty.
    EmptyList { provider: String },
    /// The maximum chunk size was zero.
    ZeroChunkSize { provider: String },
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SplitError::EmptyList { provider } => {
                write!(f, "Invalid input for '{provider}': entry list is empty")
            }
            SplitError::ZeroChunkSize { provider } => {
                write!(f, "Invalid input for '{provider}': chunk size must be positive")
            }
        }
    }
}

impl Error for SplitError {}

/// Split a provider's CIDR list into ordered, contiguous chunks of at most
/// `max_size` entries.
///
/// Every chunk except possibly the last holds exactly `max_size` entries;
/// chunk indices are 1-based. Concatenating the chunks in index order
/// reproduces `entries` exactly.
///
/// # Arguments
/// * `entries` - the ordered CIDR entries, treated as opaque lines
/// * `max_size` - maximum entries per chunk (must be positive)
/// * `provider` - owning provider name, used for chunk file names
///
/// # Returns
/// * `Ok(Vec<Chunk>)` - `ceil(entries.len() / max_size)` chunks
/// * `Err(SplitError)` - if `entries` is empty or `max_size` is zero;
///   no partial output is produced
pub fn split_into_chunks(
    entries: &[String],
    max_size: usize,
    provider: &str,
) -> Result<Vec<Chunk>, SplitError> {
    if max_size == 0 {
        return Err(SplitError::ZeroChunkSize {
            provider: provider.to_string(),
        });
    }
    if entries.is_empty() {
        return Err(SplitError::EmptyList {
            provider: provider.to_string(),
        });
    }

    let chunks: Vec<Chunk> = entries
        .chunks(max_size)
        .enumerate()
        .map(|(i, part)| Chunk::new(provider, i + 1, part.to_vec()))
        .collect();

    log::debug!(
        "split '{provider}': {count} entries -> {parts} chunk(s) of <= {max_size}",
        count = entries.len(),
        parts = chunks.len(),
    );

    Ok(chunks)
}
