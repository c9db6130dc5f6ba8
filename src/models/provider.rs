//! Provider list data model.

use std::fmt;

/// The canonical, unsplit CIDR list for one network-owning entity
/// (cloud host, VPN service, exit-node set).
///
/// Entries are opaque `address/prefix` lines kept in upstream-source
/// order; the list is never sorted or deduplicated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderList {
    /// Provider name, e.g. `"aws"` or `"tor-exit-nodes"`.
    pub name: String,
    /// CIDR entries, one per line in the canonical file.
    pub entries: Vec<String>,
}

impl ProviderList {
    pub fn new(name: &str, entries: Vec<String>) -> ProviderList {
        ProviderList {
            name: name.to_string(),
            entries,
        }
    }

    /// Canonical file name, e.g. `aws.txt`.
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for ProviderList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({} entries)", self.file_name(), self.entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_list() {
        let list = ProviderList::new("hetzner", vec!["5.9.0.0/16".to_string()]);
        assert_eq!(list.file_name(), "hetzner.txt");
        assert_eq!(list.len(), 1);
        assert_eq!(list.to_string(), "hetzner.txt (1 entries)");
    }
}
