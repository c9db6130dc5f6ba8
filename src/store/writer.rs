//! Writing canonical lists and chunk files to disk.
//!
//! Output files are UTF-8, one CIDR per line, newline-terminated, with no
//! header or trailing commentary. Canonical lists are replaced wholesale;
//! chunk directories are brought exactly in line with the current split,
//! removing stale part files from an earlier, larger split.

use super::Layout;
use crate::models::{Chunk, ProviderList};
use colored::Colorize;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Write (or, with `dry_run`, only report) a provider's canonical list.
///
/// # Returns
/// * `Ok(PathBuf)` - the canonical file path
pub fn write_provider_list(
    layout: &Layout,
    list: &ProviderList,
    dry_run: bool,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = layout.provider_file(&list.name);
    if dry_run {
        log::info!(
            "{} write {count} entries to {path}",
            "would".on_blue(),
            count = list.entries.len(),
            path = path.display()
        );
    } else {
        write_entry_lines(&path, &list.entries)?;
        log::info!(
            "wrote {count} entries to {path}",
            count = list.entries.len(),
            path = path.display()
        );
    }
    Ok(path)
}

/// Write a provider's chunk files and remove stale part files left behind
/// by a previous split.
///
/// # Returns
/// * `Ok(usize)` - number of chunk files written (or that would be written)
pub fn write_chunks(
    layout: &Layout,
    chunks: &[Chunk],
    dry_run: bool,
) -> Result<usize, Box<dyn Error>> {
    let provider = match chunks.first() {
        Some(chunk) => chunk.provider.clone(),
        None => return Err("No chunks to write".into()),
    };

    for chunk in chunks {
        let path = layout.chunk_file(&provider, chunk.index);
        if dry_run {
            log::info!("{} write {chunk} to {path}", "would".on_blue(), path = path.display());
        } else {
            write_entry_lines(&path, &chunk.entries)?;
            log::info!("wrote {chunk} to {path}", path = path.display());
        }
    }

    remove_stale_chunks(layout, &provider, chunks.len(), dry_run)?;

    Ok(chunks.len())
}

/// Remove `part-<N+1>`, `part-<N+2>`, ... files surviving from an earlier
/// split into more than `keep` chunks.
fn remove_stale_chunks(
    layout: &Layout,
    provider: &str,
    keep: usize,
    dry_run: bool,
) -> Result<(), Box<dyn Error>> {
    let mut index = keep + 1;
    loop {
        let path = layout.chunk_file(provider, index);
        if !path.exists() {
            break;
        }
        if dry_run {
            log::warn!(
                "{} remove stale chunk {path}",
                "would".on_blue(),
                path = path.display()
            );
        } else {
            std::fs::remove_file(&path)
                .map_err(|e| format!("Error removing stale chunk {}: {e}", path.display()))?;
            log::warn!("removed stale chunk {path}", path = path.display());
        }
        index += 1;
    }
    Ok(())
}

fn write_entry_lines(path: &Path, entries: &[String]) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Error creating directory {}: {e}", parent.display()))?;
    }
    let mut content = entries.join("\n");
    content.push('\n');
    std::fs::write(path, content)
        .map_err(|e| format!("Error writing {}: {e}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::reader::{read_chunks, read_provider_list};

    fn sample_entries(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("172.16.{i}.0/24")).collect()
    }

    #[test]
    fn test_write_provider_list_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = Layout::new(tmp.path());
        let list = ProviderList::new("linode", sample_entries(3));

        let path = write_provider_list(&layout, &list, false).unwrap();
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "172.16.0.0/24\n172.16.1.0/24\n172.16.2.0/24\n");
        assert!(content.ends_with('\n'), "File must be newline-terminated");

        let read_back = read_provider_list(&layout, "linode").unwrap();
        assert_eq!(read_back, list);
    }

    #[test]
    fn test_write_provider_list_dry_run() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = Layout::new(tmp.path());
        let list = ProviderList::new("linode", sample_entries(3));

        let path = write_provider_list(&layout, &list, true).unwrap();
        assert!(!path.exists(), "Dry run must not touch the filesystem");
    }

    #[test]
    fn test_write_chunks_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = Layout::new(tmp.path());
        let chunks = vec![
            Chunk::new("aws", 1, sample_entries(2)),
            Chunk::new("aws", 2, vec!["192.0.2.0/24".to_string()]),
        ];

        let written = write_chunks(&layout, &chunks, false).unwrap();
        assert_eq!(written, 2);

        let read_back = read_chunks(&layout, "aws").unwrap();
        assert_eq!(read_back, chunks);
    }

    #[test]
    fn test_write_chunks_removes_stale_parts() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = Layout::new(tmp.path());

        // Previous split produced three parts
        let old = vec![
            Chunk::new("aws", 1, sample_entries(2)),
            Chunk::new("aws", 2, sample_entries(2)),
            Chunk::new("aws", 3, sample_entries(1)),
        ];
        write_chunks(&layout, &old, false).unwrap();

        // The list shrank; re-split into a single part
        let new = vec![Chunk::new("aws", 1, sample_entries(2))];
        write_chunks(&layout, &new, false).unwrap();

        assert!(layout.chunk_file("aws", 1).exists());
        assert!(!layout.chunk_file("aws", 2).exists(), "Stale part must be removed");
        assert!(!layout.chunk_file("aws", 3).exists(), "Stale part must be removed");
    }

    #[test]
    fn test_write_chunks_empty_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = Layout::new(tmp.path());
        assert!(write_chunks(&layout, &[], false).is_err());
    }
}
