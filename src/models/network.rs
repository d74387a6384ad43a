//! CIDR network utilities for IPv4 and IPv6.
//!
//! Provides the [`IpNetwork`] struct representing an address with a prefix
//! length, along with parsing, rendering and containment tests. Networks are
//! stored in canonical form: the address is masked to the prefix length when
//! the value is constructed, so equality and hashing see no host bits.

use crate::error::CidrParseError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Maximum prefix length for an IPv4 network (32 bits).
pub const MAX_LENGTH_V4: u8 = 32;
/// Maximum prefix length for an IPv6 network (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;

fn mask_v4(addr: Ipv4Addr, len: u8) -> Ipv4Addr {
    // widen to u64 so a /0 shift stays in range
    let keep = MAX_LENGTH_V4 - len;
    let bits = u32::from(addr) as u64;
    Ipv4Addr::from(((bits >> keep) << keep) as u32)
}

fn mask_v6(addr: Ipv6Addr, len: u8) -> Ipv6Addr {
    if len == 0 {
        return Ipv6Addr::UNSPECIFIED;
    }
    let keep = MAX_LENGTH_V6 - len;
    let bits = u128::from(addr);
    Ipv6Addr::from((bits >> keep) << keep)
}

fn mask_addr(addr: IpAddr, len: u8) -> IpAddr {
    match addr {
        IpAddr::V4(v4) => IpAddr::V4(mask_v4(v4, len)),
        IpAddr::V6(v6) => IpAddr::V6(mask_v6(v6, len)),
    }
}

fn max_prefix(addr: &IpAddr) -> u8 {
    match addr {
        IpAddr::V4(_) => MAX_LENGTH_V4,
        IpAddr::V6(_) => MAX_LENGTH_V6,
    }
}

/// An IP network in CIDR notation, IPv4 or IPv6.
///
/// Immutable once constructed. The stored address is always the network
/// address (host bits zeroed), so two networks written with different host
/// bits but the same prefix compare equal.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct IpNetwork {
    addr: IpAddr,
    prefix: u8,
}

impl IpNetwork {
    /// Create a network from an address and prefix length, masking host bits.
    pub fn new(addr: IpAddr, prefix: u8) -> Result<IpNetwork, CidrParseError> {
        let max = max_prefix(&addr);
        if prefix > max {
            return Err(CidrParseError::PrefixTooLong { prefix, max });
        }
        Ok(IpNetwork {
            addr: mask_addr(addr, prefix),
            prefix,
        })
    }

    /// A host network for a single address (/32 for IPv4, /128 for IPv6).
    pub fn host(addr: IpAddr) -> IpNetwork {
        IpNetwork {
            prefix: max_prefix(&addr),
            addr,
        }
    }

    /// The network address (host bits zeroed).
    pub fn addr(&self) -> IpAddr {
        self.addr
    }

    /// The prefix length.
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Check if an IP address falls inside this network.
    ///
    /// Always `false` when the address family differs.
    pub fn contains(&self, ip: IpAddr) -> bool {
        match (self.addr, ip) {
            (IpAddr::V4(net), IpAddr::V4(ip)) => mask_v4(ip, self.prefix) == net,
            (IpAddr::V6(net), IpAddr::V6(ip)) => mask_v6(ip, self.prefix) == net,
            _ => false,
        }
    }

    /// Check if another network lies entirely inside this one.
    ///
    /// Containment is non-strict: every network contains itself. The
    /// candidate must have an equal-or-longer prefix (be at least as
    /// specific) and its network address must fall in this range.
    pub fn contains_network(&self, other: &IpNetwork) -> bool {
        other.prefix >= self.prefix && self.contains(other.addr)
    }
}

impl std::fmt::Display for IpNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl FromStr for IpNetwork {
    type Err = CidrParseError;

    /// Parse `"<ip>/<prefix>"`. A bare `"<ip>"` with no slash is accepted as
    /// a host network (/32 or /128), since membership checks commonly start
    /// from a single address.
    fn from_str(s: &str) -> Result<IpNetwork, CidrParseError> {
        let s = s.trim();
        let parts: Vec<&str> = s.split('/').collect();
        match parts.as_slice() {
            [ip] => {
                let addr: IpAddr = ip
                    .parse()
                    .map_err(|_| CidrParseError::InvalidAddress(ip.to_string()))?;
                Ok(IpNetwork::host(addr))
            }
            [ip, len] => {
                let addr: IpAddr = ip
                    .parse()
                    .map_err(|_| CidrParseError::InvalidAddress(ip.to_string()))?;
                let prefix: u8 = len
                    .parse()
                    .map_err(|_| CidrParseError::InvalidPrefix(len.to_string()))?;
                IpNetwork::new(addr, prefix)
            }
            _ => Err(CidrParseError::InvalidFormat(s.to_string())),
        }
    }
}

impl From<IpAddr> for IpNetwork {
    fn from(addr: IpAddr) -> IpNetwork {
        IpNetwork::host(addr)
    }
}

impl Serialize for IpNetwork {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.prefix);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for IpNetwork {
    fn deserialize<D>(deserializer: D) -> Result<IpNetwork, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        IpNetwork::from_str(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net(s: &str) -> IpNetwork {
        s.parse().unwrap_or_else(|e| panic!("bad test CIDR {s}: {e}"))
    }

    fn ip(s: &str) -> IpAddr {
        s.parse().expect("bad test IP")
    }

    #[test]
    fn test_parse_and_display_roundtrip() {
        for text in [
            "0.0.0.0/0",
            "10.0.0.0/8",
            "40.90.149.32/27",
            "192.168.1.42/32",
            "2603:1000::/24",
            "::/0",
            "2001:db8::1/128",
        ] {
            assert_eq!(net(text).to_string(), text);
        }
    }

    #[test]
    fn test_parse_masks_host_bits() {
        assert_eq!(net("192.168.1.42/24").to_string(), "192.168.1.0/24");
        assert_eq!(net("10.255.255.255/8").to_string(), "10.0.0.0/8");
        assert_eq!(net("2001:db8::1/32").to_string(), "2001:db8::/32");
        assert_eq!(net("192.168.1.42/24"), net("192.168.1.0/24"));
    }

    #[test]
    fn test_parse_bare_ip_is_host_network() {
        assert_eq!(net("52.233.184.181").to_string(), "52.233.184.181/32");
        assert_eq!(net("2001:db8::1").to_string(), "2001:db8::1/128");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "10.0.0.0/33".parse::<IpNetwork>(),
            Err(CidrParseError::PrefixTooLong { prefix: 33, max: 32 })
        ));
        assert!(matches!(
            "2001:db8::/129".parse::<IpNetwork>(),
            Err(CidrParseError::PrefixTooLong { prefix: 129, max: 128 })
        ));
        assert!(matches!(
            "not-an-ip/24".parse::<IpNetwork>(),
            Err(CidrParseError::InvalidAddress(_))
        ));
        assert!(matches!(
            "10.0.0.0/abc".parse::<IpNetwork>(),
            Err(CidrParseError::InvalidPrefix(_))
        ));
        assert!(matches!(
            "10.0.0.0/8/9".parse::<IpNetwork>(),
            Err(CidrParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_contains_address() {
        let n = net("40.90.149.32/27");
        assert!(n.contains(ip("40.90.149.32")));
        assert!(n.contains(ip("40.90.149.63")));
        assert!(!n.contains(ip("40.90.149.64")));
        assert!(!n.contains(ip("52.233.184.181")));

        let all = net("0.0.0.0/0");
        assert!(all.contains(ip("255.255.255.255")));
        assert!(all.contains(ip("0.0.0.0")));
    }

    #[test]
    fn test_contains_address_v6() {
        let n = net("2603:1000::/24");
        assert!(n.contains(ip("2603:1000::1")));
        assert!(n.contains(ip("2603:10ff::1")));
        assert!(!n.contains(ip("2603:1100::1")));
    }

    #[test]
    fn test_contains_rejects_family_mismatch() {
        assert!(!net("10.0.0.0/8").contains(ip("::1")));
        assert!(!net("2001:db8::/32").contains(ip("10.0.0.1")));
        assert!(!net("10.0.0.0/8").contains_network(&net("2001:db8::/32")));
    }

    #[test]
    fn test_contains_network_is_reflexive() {
        for text in ["0.0.0.0/0", "10.0.0.0/8", "40.90.149.32/27", "::/0"] {
            let n = net(text);
            assert!(n.contains_network(&n), "{n} should contain itself");
        }
    }

    #[test]
    fn test_contains_network() {
        let n = net("10.0.0.0/8");
        assert!(n.contains_network(&net("10.1.0.0/16")));
        assert!(n.contains_network(&net("10.255.255.0/24")));
        assert!(!n.contains_network(&net("11.0.0.0/16")));
        // shorter prefix is less specific, never contained
        assert!(!net("10.0.0.0/16").contains_network(&net("10.0.0.0/8")));
        // same prefix length, different block
        assert!(!net("10.0.0.0/24").contains_network(&net("10.0.1.0/24")));
    }

    #[test]
    fn test_host_network_containment() {
        let n = net("52.166.120.0/21");
        assert!(n.contains_network(&IpNetwork::from(ip("52.166.122.9"))));
        assert!(!n.contains_network(&IpNetwork::from(ip("52.166.128.1"))));
    }

    #[test]
    fn test_serde_roundtrip_exact_cidr_string() {
        let json = "\"51.4.32.0/19\"";
        let n: IpNetwork = serde_json::from_str(json).unwrap();
        assert_eq!(n, net("51.4.32.0/19"));
        assert_eq!(serde_json::to_string(&n).unwrap(), json);
    }

    #[test]
    fn test_serde_rejects_garbage() {
        assert!(serde_json::from_str::<IpNetwork>("\"51.4.32.0//19\"").is_err());
        assert!(serde_json::from_str::<IpNetwork>("\"hello\"").is_err());
    }

    #[test]
    fn test_ordering_and_hashing() {
        use std::collections::HashSet;
        let a = net("10.0.0.1/24");
        let b = net("10.0.0.0/24");
        assert_eq!(a, b);
        let set: HashSet<IpNetwork> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert!(net("10.0.0.0/24") < net("10.0.1.0/24"));
    }
}
