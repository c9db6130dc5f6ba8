//! Chunk set verification.
//!
//! Checks that a provider's chunk files on disk are a faithful split of its
//! canonical list: concatenating them in index order must reproduce the
//! list exactly, every chunk but the last must be full, and the file set
//! must be exactly `part-001..part-N`.

use crate::store::{reader, Layout};
use std::error::Error;

/// Outcome of verifying one provider.
#[derive(Debug)]
pub struct VerifyReport {
    pub provider: String,
    /// Entry count of the canonical list.
    pub canonical_count: usize,
    /// Entry count per chunk file, in index order.
    pub chunk_counts: Vec<usize>,
    /// Human-readable findings; empty means the provider verified clean.
    pub problems: Vec<String>,
}

impl VerifyReport {
    pub fn is_ok(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Verify a provider's chunk files against its canonical list.
///
/// # Arguments
/// * `layout` - the lists tree
/// * `provider` - provider name
/// * `max_size` - the chunk size the split was made with
///
/// # Returns
/// * `Ok(VerifyReport)` - findings; check [`VerifyReport::is_ok`]
/// * `Err` - only for I/O failures (missing canonical list, unreadable dir)
pub fn verify_provider(
    layout: &Layout,
    provider: &str,
    max_size: usize,
) -> Result<VerifyReport, Box<dyn Error>> {
    let canonical = reader::read_provider_list(layout, provider)?;
    let chunks = reader::read_chunks(layout, provider)?;

    let mut problems = Vec::new();

    if chunks.is_empty() {
        problems.push("no chunk files found".to_string());
    }

    // Indices must be exactly 1..=N
    for (i, chunk) in chunks.iter().enumerate() {
        let expected = i + 1;
        if chunk.index != expected {
            problems.push(format!(
                "chunk indices not contiguous: expected part-{expected:03}, found part-{found:03}",
                found = chunk.index
            ));
            break;
        }
    }

    // Every chunk but the last must hold exactly max_size entries
    if let Some((last, full)) = chunks.split_last() {
        for chunk in full {
            if chunk.len() != max_size {
                problems.push(format!(
                    "{name} holds {count} entries, expected {max_size}",
                    name = chunk.file_name(),
                    count = chunk.len()
                ));
            }
        }
        if last.len() > max_size {
            problems.push(format!(
                "{name} holds {count} entries, more than the maximum {max_size}",
                name = last.file_name(),
                count = last.len()
            ));
        }
    }

    // Concatenation in index order must reproduce the canonical list
    let rejoined: Vec<&String> = chunks.iter().flat_map(|c| c.entries.iter()).collect();
    let canonical_refs: Vec<&String> = canonical.entries.iter().collect();
    if !chunks.is_empty() && rejoined != canonical_refs {
        problems.push(format!(
            "chunk concatenation does not match canonical list ({got} vs {want} entries)",
            got = rejoined.len(),
            want = canonical_refs.len()
        ));
    }

    // The chunk directory must not hold unrelated .txt files
    let dir_files = reader::count_chunk_dir_files(layout, provider)?;
    if dir_files != chunks.len() {
        problems.push(format!(
            "chunk directory holds {dir_files} .txt files, expected {expected}",
            expected = chunks.len()
        ));
    }

    Ok(VerifyReport {
        provider: provider.to_string(),
        canonical_count: canonical.len(),
        chunk_counts: chunks.iter().map(|c| c.len()).collect(),
        problems,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProviderList;
    use crate::processing::split_into_chunks;
    use crate::store::writer::{write_chunks, write_provider_list};

    fn sample_entries(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("10.{}.{}.0/24", i / 256, i % 256)).collect()
    }

    fn write_split(layout: &Layout, provider: &str, count: usize, max_size: usize) {
        let list = ProviderList::new(provider, sample_entries(count));
        write_provider_list(layout, &list, false).unwrap();
        let chunks = split_into_chunks(&list.entries, max_size, provider).unwrap();
        write_chunks(layout, &chunks, false).unwrap();
    }

    #[test]
    fn test_verify_clean_split() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = Layout::new(tmp.path());
        write_split(&layout, "aws", 250, 100);

        let report = verify_provider(&layout, "aws", 100).unwrap();
        assert!(report.is_ok(), "Unexpected problems: {:?}", report.problems);
        assert_eq!(report.canonical_count, 250);
        assert_eq!(report.chunk_counts, vec![100, 100, 50]);
    }

    #[test]
    fn test_verify_missing_chunks() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = Layout::new(tmp.path());
        let list = ProviderList::new("linode", sample_entries(10));
        write_provider_list(&layout, &list, false).unwrap();

        let report = verify_provider(&layout, "linode", 100).unwrap();
        assert!(!report.is_ok());
        assert!(report.problems[0].contains("no chunk files"));
    }

    #[test]
    fn test_verify_detects_gap_in_indices() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = Layout::new(tmp.path());
        write_split(&layout, "aws", 30, 10);
        std::fs::remove_file(layout.chunk_file("aws", 2)).unwrap();

        let report = verify_provider(&layout, "aws", 10).unwrap();
        assert!(!report.is_ok());
        assert!(report
            .problems
            .iter()
            .any(|p| p.contains("not contiguous")));
    }

    #[test]
    fn test_verify_detects_edited_chunk() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = Layout::new(tmp.path());
        write_split(&layout, "aws", 30, 10);
        // Drop a line from the middle chunk
        std::fs::write(layout.chunk_file("aws", 2), "192.0.2.0/24\n").unwrap();

        let report = verify_provider(&layout, "aws", 10).unwrap();
        assert!(!report.is_ok());
        assert!(report
            .problems
            .iter()
            .any(|p| p.contains("does not match canonical list")));
    }

    #[test]
    fn test_verify_detects_stray_file() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = Layout::new(tmp.path());
        write_split(&layout, "aws", 30, 10);
        std::fs::write(layout.chunks_dir("aws").join("scratch.txt"), "junk\n").unwrap();

        let report = verify_provider(&layout, "aws", 10).unwrap();
        assert!(!report.is_ok());
        assert!(report.problems.iter().any(|p| p.contains(".txt files")));
    }

    #[test]
    fn test_verify_missing_canonical_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = Layout::new(tmp.path());
        assert!(verify_provider(&layout, "aws", 10).is_err());
    }
}
