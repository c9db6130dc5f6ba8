//! Directory layout of the lists tree.
//!
//! Canonical lists live under `<lists_dir>/providers/`, chunk files under
//! `<lists_dir>/chunks/<provider>/`.

use crate::models::chunk_file_name;
use itertools::Itertools;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Resolves file locations inside the lists tree.
#[derive(Debug, Clone)]
pub struct Layout {
    lists_dir: PathBuf,
}

impl Layout {
    pub fn new(lists_dir: impl Into<PathBuf>) -> Layout {
        Layout {
            lists_dir: lists_dir.into(),
        }
    }

    /// Directory holding the canonical `<provider>.txt` files.
    pub fn providers_dir(&self) -> PathBuf {
        self.lists_dir.join("providers")
    }

    /// Root directory holding one chunk directory per provider.
    pub fn chunks_root(&self) -> PathBuf {
        self.lists_dir.join("chunks")
    }

    /// Canonical list file for a provider.
    pub fn provider_file(&self, provider: &str) -> PathBuf {
        self.providers_dir().join(format!("{provider}.txt"))
    }

    /// Chunk directory for a provider.
    pub fn chunks_dir(&self, provider: &str) -> PathBuf {
        self.chunks_root().join(provider)
    }

    /// Chunk file for a provider and 1-based chunk index.
    pub fn chunk_file(&self, provider: &str, index: usize) -> PathBuf {
        self.chunks_dir(provider).join(chunk_file_name(provider, index))
    }

    /// List the providers that have a canonical file on disk, sorted by name.
    pub fn discover_providers(&self) -> Result<Vec<String>, Box<dyn Error>> {
        let dir = self.providers_dir();
        let entries = std::fs::read_dir(&dir)
            .map_err(|e| format!("Error reading providers directory {}: {e}", dir.display()))?;

        let providers: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().map(|ext| ext == "txt").unwrap_or(false))
            .filter_map(|path| file_stem_string(&path))
            .sorted()
            .collect();

        Ok(providers)
    }
}

fn file_stem_string(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.to_string())
}
