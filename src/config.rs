//! Runtime configuration.
//!
//! Settings come from three places, highest priority first:
//! CLI flags, environment variables (loaded via `dotenv`), built-in defaults.

use std::error::Error;
use std::path::PathBuf;

/// Default maximum number of entries per chunk file. Matches the upload
/// limit observed for Entra ID named locations.
pub const DEFAULT_CHUNK_SIZE: usize = 2000;

/// Default root directory for canonical lists and chunks.
pub const DEFAULT_LISTS_DIR: &str = "lists";

/// Environment variable overriding the lists root directory.
pub const ENV_LISTS_DIR: &str = "IP_LISTS_DIR";

/// Environment variable overriding the chunk size.
pub const ENV_CHUNK_SIZE: &str = "IP_CHUNK_SIZE";

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Root directory holding `providers/` and `chunks/`.
    pub lists_dir: PathBuf,
    /// Maximum entries per chunk file.
    pub chunk_size: usize,
}

impl Settings {
    /// Resolve settings from optional CLI overrides, the environment, and
    /// defaults.
    ///
    /// # Arguments
    /// * `lists_dir` - CLI `--lists-dir` value, if given
    /// * `chunk_size` - CLI `--chunk-size` value, if given
    pub fn resolve(
        lists_dir: Option<PathBuf>,
        chunk_size: Option<usize>,
    ) -> Result<Settings, Box<dyn Error>> {
        let lists_dir = match lists_dir {
            Some(dir) => dir,
            None => match std::env::var(ENV_LISTS_DIR) {
                Ok(dir) => PathBuf::from(dir),
                Err(_) => PathBuf::from(DEFAULT_LISTS_DIR),
            },
        };

        let chunk_size = match chunk_size {
            Some(size) => size,
            None => match std::env::var(ENV_CHUNK_SIZE) {
                Ok(raw) => parse_chunk_size(&raw)?,
                Err(_) => DEFAULT_CHUNK_SIZE,
            },
        };

        log::debug!(
            "settings: lists_dir={dir}, chunk_size={chunk_size}",
            dir = lists_dir.display(),
        );

        Ok(Settings {
            lists_dir,
            chunk_size,
        })
    }
}

/// Parse a chunk size from its environment-variable form.
fn parse_chunk_size(raw: &str) -> Result<usize, Box<dyn Error>> {
    raw.trim()
        .parse()
        .map_err(|_| format!("Invalid {ENV_CHUNK_SIZE} value: '{raw}'").into())
}
