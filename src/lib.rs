// cargo watch -x 'fmt' -x 'test'

pub mod cli;
pub mod config;
pub mod feeds;
pub mod models;
pub mod output;
pub mod processing;
pub mod store;

use config::Settings;
use feeds::FeedFormat;
use models::ProviderList;
use output::CountRow;
use processing::{split_into_chunks, verify_provider, VerifyReport};
use std::error::Error;
use std::path::Path;
use store::{reader, writer, Layout};

/// Replace a provider's canonical list from a downloaded feed file and,
/// unless `no_chunk` is set, re-split it into chunk files.
///
/// The feed format comes from the provider registry; `format` overrides it
/// and is required for providers without a parseable feed.
pub fn import_provider(
    settings: &Settings,
    provider: &str,
    source: &Path,
    format: Option<FeedFormat>,
    dry_run: bool,
    no_chunk: bool,
) -> Result<ProviderList, Box<dyn Error>> {
    let format = match format.or_else(|| feeds::find_provider(provider).and_then(|p| p.format)) {
        Some(format) => format,
        None => match feeds::find_provider(provider) {
            Some(_) => {
                return Err(format!(
                    "Provider '{provider}' has no machine-readable feed; \
                     pass --format for the manually prepared file"
                )
                .into())
            }
            None => {
                return Err(format!(
                    "Unknown provider '{provider}'; pass --format to import an unregistered one"
                )
                .into())
            }
        },
    };

    log::info!(
        "importing '{provider}' from {source} as {format:?}",
        source = source.display()
    );

    let content = std::fs::read_to_string(source)
        .map_err(|e| format!("Error reading feed file {}: {e}", source.display()))?;
    let entries = format.parse(&content)?;
    if entries.is_empty() {
        return Err(format!(
            "No IPv4 CIDRs found in {} for '{provider}'",
            source.display()
        )
        .into());
    }

    let layout = Layout::new(&settings.lists_dir);
    let list = ProviderList::new(provider, entries);
    writer::write_provider_list(&layout, &list, dry_run)?;

    if !no_chunk {
        let chunks = split_into_chunks(&list.entries, settings.chunk_size, provider)?;
        writer::write_chunks(&layout, &chunks, dry_run)?;
    }

    Ok(list)
}

/// Re-split canonical lists into chunk files.
///
/// With an empty `providers` slice, every provider found on disk is split.
///
/// # Returns
/// * `Ok(usize)` - total number of chunk files written
pub fn split_providers(
    settings: &Settings,
    providers: &[String],
    dry_run: bool,
) -> Result<usize, Box<dyn Error>> {
    let layout = Layout::new(&settings.lists_dir);
    let providers = resolve_providers(&layout, providers)?;

    let mut written = 0;
    for provider in &providers {
        let list = reader::read_provider_list(&layout, provider)?;
        let chunks = split_into_chunks(&list.entries, settings.chunk_size, provider)?;
        written += writer::write_chunks(&layout, &chunks, dry_run)?;
    }

    log::info!(
        "split {count} provider(s) into {written} chunk file(s)",
        count = providers.len()
    );
    Ok(written)
}

/// Verify chunk files against the canonical lists.
///
/// With an empty `providers` slice, every provider found on disk is checked.
pub fn verify_providers(
    settings: &Settings,
    providers: &[String],
) -> Result<Vec<VerifyReport>, Box<dyn Error>> {
    let layout = Layout::new(&settings.lists_dir);
    let providers = resolve_providers(&layout, providers)?;

    providers
        .iter()
        .map(|provider| verify_provider(&layout, provider, settings.chunk_size))
        .collect()
}

/// Collect entry and chunk counts per provider.
///
/// With an empty `providers` slice, every provider found on disk is counted.
pub fn count_providers(
    settings: &Settings,
    providers: &[String],
) -> Result<Vec<CountRow>, Box<dyn Error>> {
    let layout = Layout::new(&settings.lists_dir);
    let providers = resolve_providers(&layout, providers)?;

    providers
        .iter()
        .map(|provider| {
            let list = reader::read_provider_list(&layout, provider)?;
            let chunks = reader::read_chunks(&layout, provider)?;
            Ok(CountRow {
                provider: provider.clone(),
                canonical_count: list.len(),
                chunk_counts: chunks.iter().map(|c| c.len()).collect(),
            })
        })
        .collect()
}

/// Expand an empty provider selection to everything found on disk.
fn resolve_providers(layout: &Layout, requested: &[String]) -> Result<Vec<String>, Box<dyn Error>> {
    if !requested.is_empty() {
        return Ok(requested.to_vec());
    }
    let discovered = layout.discover_providers()?;
    if discovered.is_empty() {
        return Err(format!(
            "No provider lists found under {}",
            layout.providers_dir().display()
        )
        .into());
    }
    Ok(discovered)
}
