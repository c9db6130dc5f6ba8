//! Tor exit-address feed parsing.
//!
//! The check.torproject.org `exit-addresses` dump is a block format:
//!
//! ```text
//! ExitNode 08CB1BB1FBDAE8BC8E0D44E3ADA3FEFAE70B7E12
//! Published 2025-10-06 03:21:10
//! LastStatus 2025-10-06 04:00:00
//! ExitAddress 185.220.101.4 2025-10-06 04:05:31
//! ```
//!
//! Every `ExitAddress` line yields one `/32` entry.

use crate::models::Cidr;
use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Regex for `ExitAddress <ip> <timestamp>` lines.
static EXIT_ADDRESS_REGEX: OnceLock<Regex> = OnceLock::new();

fn exit_address_regex() -> &'static Regex {
    EXIT_ADDRESS_REGEX
        .get_or_init(|| Regex::new(r"^ExitAddress\s+(\S+)").expect("Invalid Regex"))
}

/// Parse an exit-addresses dump into `/32` CIDR entries, in dump order.
pub fn parse_exit_addresses(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let caps = exit_address_regex().captures(line)?;
            let addr: Ipv4Addr = caps[1].parse().ok()?;
            Some(Cidr::host(addr).to_string())
        })
        .collect()
}
