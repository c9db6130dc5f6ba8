//! Known provider registry.
//!
//! Names the providers this tool maintains lists for, where their upstream
//! data comes from, and which feed format applies. The URLs are operator
//! documentation only: fetching upstream data is a manual step, never done
//! by this tool.

use super::FeedFormat;
use lazy_static::lazy_static;

/// A known network provider.
#[derive(Debug)]
pub struct Provider {
    /// Provider name; also the canonical file stem and chunk directory name.
    pub name: &'static str,
    /// Feed format of the upstream data, or `None` when the ranges have to
    /// be extracted by hand (no machine-readable feed).
    pub format: Option<FeedFormat>,
    /// Where the operator downloads the upstream data from.
    pub source_url: Option<&'static str>,
}

lazy_static! {
    /// All known providers, in registry order.
    pub static ref PROVIDERS: Vec<Provider> = vec![
        Provider {
            name: "aws",
            format: Some(FeedFormat::AwsJson),
            source_url: Some("https://ip-ranges.amazonaws.com/ip-ranges.json"),
        },
        Provider {
            name: "digitalocean",
            format: Some(FeedFormat::GeofeedCsv),
            source_url: Some("https://www.digitalocean.com/geo/google.csv"),
        },
        Provider {
            name: "linode",
            format: Some(FeedFormat::GeofeedCsv),
            source_url: Some("https://geoip.linode.com/"),
        },
        Provider {
            name: "tor-exit-nodes",
            format: Some(FeedFormat::TorExit),
            source_url: Some("https://check.torproject.org/exit-addresses"),
        },
        Provider {
            name: "vultr",
            format: Some(FeedFormat::PlainText),
            source_url: Some("https://geofeed.constant.com/?text"),
        },
        Provider {
            name: "vpn",
            format: Some(FeedFormat::PlainText),
            source_url: Some(
                "https://raw.githubusercontent.com/X4BNet/lists_vpn/main/output/vpn/ipv4.txt"
            ),
        },
        Provider {
            name: "hetzner",
            format: None,
            source_url: Some("https://bgp.he.net/AS24940#_prefixes"),
        },
        Provider {
            name: "hostinger",
            format: None,
            source_url: None,
        },
        Provider {
            name: "ovh",
            format: None,
            source_url: None,
        },
        Provider {
            name: "protonvpn",
            format: None,
            source_url: Some("https://protonvpn.com/vpn-servers"),
        },
    ];
}

/// Look up a provider by name.
pub fn find_provider(name: &str) -> Option<&'static Provider> {
    PROVIDERS.iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_provider() {
        let aws = find_provider("aws").expect("aws must be registered");
        assert_eq!(aws.format, Some(FeedFormat::AwsJson));
        assert!(aws.source_url.is_some());

        assert!(find_provider("azure").is_none());
    }

    #[test]
    fn test_manual_providers_have_no_format() {
        for name in ["hetzner", "hostinger", "ovh", "protonvpn"] {
            let provider = find_provider(name).expect("Manual provider must be registered");
            assert!(provider.format.is_none(), "{name} has no parseable feed");
        }
    }

    #[test]
    fn test_registry_names_unique() {
        let mut names: Vec<&str> = PROVIDERS.iter().map(|p| p.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), PROVIDERS.len());
    }
}
