//! Terminal reports.
//!
//! Prints the inventory table (`count`), verification results (`verify`)
//! and the provider registry (`list`) to stdout.

use crate::feeds::{Provider, PROVIDERS};
use crate::processing::VerifyReport;
use colored::Colorize;
use itertools::Itertools;

/// Per-provider line of the inventory table.
#[derive(Debug)]
pub struct CountRow {
    pub provider: String,
    /// Entry count of the canonical list.
    pub canonical_count: usize,
    /// Entry count per chunk file, in index order.
    pub chunk_counts: Vec<usize>,
}

/// Format a value as a quoted, right-aligned field.
fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    if quoted.len() >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Print the inventory table: canonical and per-chunk entry counts.
pub fn print_counts(rows: &[CountRow]) {
    println!(
        "# IP list inventory {stamp}",
        stamp = chrono::Local::now().format("%Y-%m-%d %H:%M")
    );
    println!(
        "{provider},{entries},{chunks},{per_chunk}",
        provider = format_field("provider", 18),
        entries = format_field("entries", 9),
        chunks = format_field("chunks", 8),
        per_chunk = format_field("per_chunk", 11),
    );

    for row in rows {
        println!(
            "{provider},{entries},{chunks},{per_chunk}",
            provider = format_field(&row.provider, 18),
            entries = format_field(row.canonical_count, 9),
            chunks = format_field(row.chunk_counts.len(), 8),
            per_chunk = format_field(row.chunk_counts.iter().join("+"), 11),
        );
    }

    let total_entries: usize = rows.iter().map(|r| r.canonical_count).sum();
    let total_chunks: usize = rows.iter().map(|r| r.chunk_counts.len()).sum();
    println!(
        "# {count} provider(s), {total_entries} entries, {total_chunks} chunk file(s)",
        count = rows.len()
    );
}

/// Print one provider's verification result.
pub fn print_verify(report: &VerifyReport) {
    if report.is_ok() {
        println!(
            "{provider}: {ok} ({entries} entries, {chunks} chunk file(s))",
            provider = report.provider,
            ok = "OK".green(),
            entries = report.canonical_count,
            chunks = report.chunk_counts.len()
        );
    } else {
        println!(
            "{provider}: {fail}",
            provider = report.provider,
            fail = "FAIL".on_red()
        );
        for problem in &report.problems {
            println!("  - {problem}");
        }
    }
}

/// Print the provider registry: automated feeds first, then the providers
/// whose ranges have to be extracted by hand.
pub fn print_registry() {
    println!("{}", "Providers with a parseable feed:".bold());
    for provider in PROVIDERS.iter().filter(|p| p.format.is_some()) {
        print_registry_line(provider);
    }

    println!();
    println!("{}", "Manual providers (no machine-readable feed):".bold());
    for provider in PROVIDERS.iter().filter(|p| p.format.is_none()) {
        print_registry_line(provider);
    }
}

fn print_registry_line(provider: &Provider) {
    let source = match provider.source_url {
        Some(url) => url.to_string(),
        None => "(manual extraction required)".to_string(),
    };
    match provider.format {
        Some(format) => println!(
            "  {name:18} {format:11} {source}",
            name = provider.name.blue(),
            format = format!("{format:?}"),
        ),
        None => println!("  {name:18} {source}", name = provider.name.blue()),
    }
}
