//! Reading canonical lists and chunk files from disk.

use super::Layout;
use crate::models::{Chunk, ProviderList};
use std::error::Error;
use std::path::Path;

/// Read a provider's canonical list.
///
/// Lines are trimmed; blank lines are dropped. Entries are otherwise kept
/// verbatim and in file order.
pub fn read_provider_list(layout: &Layout, provider: &str) -> Result<ProviderList, Box<dyn Error>> {
    let path = layout.provider_file(provider);
    let entries = read_entry_lines(&path)?;
    log::debug!(
        "read {count} entries from {path}",
        count = entries.len(),
        path = path.display()
    );
    Ok(ProviderList::new(provider, entries))
}

/// Read a provider's chunk files, sorted by chunk index.
///
/// Only files matching `<provider>-part-<NNN>.txt` are picked up; an empty
/// result means the provider has not been split yet.
pub fn read_chunks(layout: &Layout, provider: &str) -> Result<Vec<Chunk>, Box<dyn Error>> {
    let dir = layout.chunks_dir(provider);
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut chunks: Vec<Chunk> = Vec::new();
    let entries = std::fs::read_dir(&dir)
        .map_err(|e| format!("Error reading chunk directory {}: {e}", dir.display()))?;

    for entry in entries {
        let path = entry?.path();
        let file_name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => continue,
        };
        let index = match parse_chunk_index(provider, file_name) {
            Some(index) => index,
            None => continue,
        };
        let lines = read_entry_lines(&path)?;
        chunks.push(Chunk::new(provider, index, lines));
    }

    chunks.sort_by_key(|c| c.index);
    Ok(chunks)
}

/// Extract the chunk index from a file name like `aws-part-002.txt`.
fn parse_chunk_index(provider: &str, file_name: &str) -> Option<usize> {
    let index = file_name
        .strip_prefix(provider)?
        .strip_prefix("-part-")?
        .strip_suffix(".txt")?;
    index.parse().ok()
}

/// Count the `.txt` files in a provider's chunk directory.
pub fn count_chunk_dir_files(layout: &Layout, provider: &str) -> Result<usize, Box<dyn Error>> {
    let dir = layout.chunks_dir(provider);
    if !dir.exists() {
        return Ok(0);
    }
    let count = std::fs::read_dir(&dir)
        .map_err(|e| format!("Error reading chunk directory {}: {e}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .map(|ext| ext == "txt")
                .unwrap_or(false)
        })
        .count();
    Ok(count)
}

fn read_entry_lines(path: &Path) -> Result<Vec<String>, Box<dyn Error>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading {}: {e}", path.display()))?;
    Ok(text
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chunk_index() {
        assert_eq!(parse_chunk_index("aws", "aws-part-001.txt"), Some(1));
        assert_eq!(parse_chunk_index("aws", "aws-part-042.txt"), Some(42));
        assert_eq!(parse_chunk_index("aws", "linode-part-001.txt"), None);
        assert_eq!(parse_chunk_index("aws", "aws-part-001.bak"), None);
        assert_eq!(parse_chunk_index("aws", "aws.txt"), None);
    }

    #[test]
    fn test_read_provider_list_trims_blank_lines() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = Layout::new(tmp.path());
        std::fs::create_dir_all(layout.providers_dir()).unwrap();
        std::fs::write(
            layout.provider_file("vultr"),
            "45.32.0.0/16\n\n 108.61.0.0/16 \n",
        )
        .unwrap();

        let list = read_provider_list(&layout, "vultr").unwrap();
        assert_eq!(list.entries, vec!["45.32.0.0/16", "108.61.0.0/16"]);
    }

    #[test]
    fn test_read_provider_list_missing_file() {
        let layout = Layout::new("/nonexistent/lists-root");
        assert!(read_provider_list(&layout, "aws").is_err());
    }

    #[test]
    fn test_read_chunks_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = Layout::new(tmp.path());
        let dir = layout.chunks_dir("aws");
        std::fs::create_dir_all(&dir).unwrap();
        // Written out of order on purpose
        std::fs::write(dir.join("aws-part-002.txt"), "10.2.0.0/16\n").unwrap();
        std::fs::write(dir.join("aws-part-001.txt"), "10.1.0.0/16\n").unwrap();
        std::fs::write(dir.join("README.txt"), "not a chunk\n").unwrap();

        let chunks = read_chunks(&layout, "aws").unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].index, 1);
        assert_eq!(chunks[0].entries, vec!["10.1.0.0/16"]);
        assert_eq!(chunks[1].index, 2);
    }

    #[test]
    fn test_read_chunks_no_dir() {
        let layout = Layout::new("/nonexistent/lists-root");
        assert!(read_chunks(&layout, "aws").unwrap().is_empty());
    }
}
