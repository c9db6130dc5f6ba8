//! Command line interface.

use crate::feeds::FeedFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Maintain chunked IPv4 CIDR block lists for Entra ID named locations.
///
/// Canonical lists live under `<lists-dir>/providers/<provider>.txt`; chunk
/// files under `<lists-dir>/chunks/<provider>/<provider>-part-NNN.txt`.
#[derive(Parser, Debug)]
#[command(name = "entra-ip-chunker", version, about)]
pub struct Args {
    /// Root directory of the lists tree (default: `lists`, or $IP_LISTS_DIR)
    #[arg(long, global = true)]
    pub lists_dir: Option<PathBuf>,

    /// Maximum entries per chunk file (default: 2000, or $IP_CHUNK_SIZE)
    #[arg(long, global = true)]
    pub chunk_size: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replace a provider's canonical list from a downloaded feed file and
    /// re-split it into chunks
    Import {
        /// Provider name, e.g. `aws`
        provider: String,
        /// Path to the manually downloaded feed file
        file: PathBuf,
        /// Feed format; defaults to the registry entry for known providers
        #[arg(long, value_enum)]
        format: Option<FeedFormat>,
        /// Report what would be written without touching any file
        #[arg(short = 'n', long)]
        dry_run: bool,
        /// Only replace the canonical list, skip re-splitting
        #[arg(long)]
        no_chunk: bool,
    },
    /// Re-split canonical lists into chunk files
    Split {
        /// Providers to split (default: every provider found on disk)
        providers: Vec<String>,
        /// Report what would be written without touching any file
        #[arg(short = 'n', long)]
        dry_run: bool,
    },
    /// Check that chunk files reproduce the canonical lists exactly
    Verify {
        /// Providers to verify (default: every provider found on disk)
        providers: Vec<String>,
    },
    /// Print entry and chunk counts per provider
    Count {
        /// Providers to count (default: every provider found on disk)
        providers: Vec<String>,
    },
    /// List the known providers and their upstream sources
    List,
}
