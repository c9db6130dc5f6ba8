//! Geofeed and plain-text feed parsing.
//!
//! Covers the RFC 8805-style CSV geofeeds (DigitalOcean, Linode) and the
//! one-CIDR-per-line text feeds (Vultr, X4BNet VPN list). Rows that are not
//! IPv4 `address/prefix` shaped - IPv6 prefixes, comments, junk - are
//! skipped; surviving entries keep their original spelling and order.

use crate::models::Cidr;

/// Parse a CSV geofeed; the first column of each row is the prefix.
pub fn parse_geofeed_csv(content: &str) -> Vec<String> {
    parse_rows(content, |line| line.split(',').next().unwrap_or(line))
}

/// Parse a plain text feed, one prefix per line.
pub fn parse_plain_text(content: &str) -> Vec<String> {
    parse_rows(content, |line| line)
}

fn parse_rows<'a>(content: &'a str, pick: impl Fn(&'a str) -> &'a str) -> Vec<String> {
    let mut skipped = 0usize;
    let entries: Vec<String> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let field = pick(line).trim();
            if field.parse::<Cidr>().is_ok() {
                Some(field.to_string())
            } else {
                skipped += 1;
                log::trace!("skipping non-IPv4 row: {line}");
                None
            }
        })
        .collect();

    if skipped > 0 {
        log::info!(
            "feed: kept {kept} IPv4 rows, skipped {skipped} non-IPv4 rows",
            kept = entries.len()
        );
    }

    entries
}
