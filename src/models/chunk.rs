//! Chunk data model.

use std::fmt;

/// File name for chunk `index` (1-based) of `provider`,
/// e.g. `aws-part-001.txt`. Indices always start at `part-001`,
/// also for providers that fit in a single chunk.
pub fn chunk_file_name(provider: &str, index: usize) -> String {
    format!("{provider}-part-{index:03}.txt")
}

/// A contiguous, bounded-size slice of a provider's CIDR list.
///
/// Chunks are tagged with a 1-based sequential index; concatenating a
/// provider's chunks in index order reproduces the provider list exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Owning provider name, e.g. `"aws"`.
    pub provider: String,
    /// 1-based position within the split.
    pub index: usize,
    /// CIDR entries, one per output line.
    pub entries: Vec<String>,
}

impl Chunk {
    pub fn new(provider: &str, index: usize, entries: Vec<String>) -> Chunk {
        Chunk {
            provider: provider.to_string(),
            index,
            entries,
        }
    }

    /// File name this chunk is written as.
    pub fn file_name(&self) -> String {
        chunk_file_name(&self.provider, self.index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({} entries)", self.file_name(), self.entries.len())
    }
}
