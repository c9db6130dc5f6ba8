//! Feed parsing for provider source data.
//!
//! Upstream data is downloaded manually by the operator; this module turns
//! a saved feed file into an ordered list of IPv4 CIDR entries:
//! - [`aws`] - AWS `ip-ranges.json`
//! - [`geofeed`] - CSV geofeeds and plain one-per-line text
//! - [`tor`] - Tor `exit-addresses` dumps
//! - [`registry`] - the known-provider table

mod aws;
mod geofeed;
mod registry;
mod tor;

use clap::ValueEnum;
use std::error::Error;

// Re-export public types and functions
pub use aws::parse_aws_json;
pub use geofeed::{parse_geofeed_csv, parse_plain_text};
pub use registry::{find_provider, Provider, PROVIDERS};
pub use tor::parse_exit_addresses;

/// Feed format of a provider's upstream source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FeedFormat {
    /// AWS `ip-ranges.json` document.
    AwsJson,
    /// CSV geofeed, prefix in the first column.
    GeofeedCsv,
    /// One prefix per line.
    PlainText,
    /// Tor `exit-addresses` dump.
    TorExit,
}

impl FeedFormat {
    /// Parse feed `content` into ordered CIDR entries.
    pub fn parse(&self, content: &str) -> Result<Vec<String>, Box<dyn Error>> {
        match self {
            FeedFormat::AwsJson => parse_aws_json(content),
            FeedFormat::GeofeedCsv => Ok(parse_geofeed_csv(content)),
            FeedFormat::PlainText => Ok(parse_plain_text(content)),
            FeedFormat::TorExit => Ok(parse_exit_addresses(content)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse_dispatch() {
        let cidrs = FeedFormat::PlainText.parse("10.0.0.0/8\n").unwrap();
        assert_eq!(cidrs, vec!["10.0.0.0/8"]);

        let cidrs = FeedFormat::TorExit.parse("ExitAddress 10.0.0.1 x\n").unwrap();
        assert_eq!(cidrs, vec!["10.0.0.1/32"]);
    }
}
