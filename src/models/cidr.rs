//! IPv4 CIDR notation utilities.
//!
//! Provides [`Cidr`] for recognizing and formatting IPv4 `address/prefix`
//! strings. The chunker itself treats list entries as opaque text; this type
//! is only used at the feed-parsing boundary to keep IPv6 and junk rows out
//! of the provider lists.

use std::error::Error;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum prefix length for an IPv4 network (32 bits).
pub const MAX_PREFIX_LEN: u8 = 32;

/// IPv4 network in CIDR notation.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    /// The network address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub prefix: u8,
}

impl Cidr {
    /// Create a [`Cidr`] from a string such as `"10.0.0.0/24"`.
    pub fn new(addr_cidr: &str) -> Result<Cidr, Box<dyn Error>> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(format!("Invalid address/prefix: {addr_cidr}").into());
        }
        let addr: Ipv4Addr = parts[0]
            .parse()
            .map_err(|_| format!("Invalid IPv4 address: {}", parts[0]))?;
        let prefix: u8 = parts[1]
            .parse()
            .map_err(|_| format!("Invalid prefix length: {}", parts[1]))?;
        if prefix > MAX_PREFIX_LEN {
            return Err(format!("Prefix length too long: /{prefix}").into());
        }
        Ok(Cidr { addr, prefix })
    }

    /// Wrap a single host address as a `/32` network.
    pub fn host(addr: Ipv4Addr) -> Cidr {
        Cidr {
            addr,
            prefix: MAX_PREFIX_LEN,
        }
    }
}

impl FromStr for Cidr {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Cidr, Self::Err> {
        Cidr::new(s)
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}
