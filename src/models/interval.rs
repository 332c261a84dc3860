//! IPv4 prefix as a closed address interval.
//!
//! Provides [`AddressInterval`] along with the mask helpers used to build it.

use crate::error::ParseError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use netmerge::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Option<u32> {
    if len > MAX_LENGTH {
        None
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Some(mask as u32)
    }
}

/// Network address (lowest address) of `addr` under a mask.
pub fn network_addr(addr: u32, mask: u32) -> u32 {
    addr & mask
}

/// Broadcast address (highest address) of `addr` under a mask.
pub fn broadcast_addr(addr: u32, mask: u32) -> u32 {
    network_addr(addr, mask) | !mask
}

/// Number of leading bits `a` and `b` have in common, counted from the MSB.
pub fn shared_prefix_len(a: u32, b: u32) -> u8 {
    (a ^ b).leading_zeros() as u8
}

/// Render a u32 address as a dotted quad.
pub fn u32_to_ip(addr: u32) -> Ipv4Addr {
    Ipv4Addr::from(addr)
}

/// One IPv4 prefix held as the range `[first, last]` of u32 addresses.
///
/// `last` is always `first` with every host bit set.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AddressInterval {
    /// Network address.
    pub first: u32,
    /// Broadcast address.
    pub last: u32,
    /// Prefix length (0-32).
    pub prefix_len: u8,
}

impl AddressInterval {
    /// Parse a CIDR string (e.g. "10.0.0.0/24") into an interval.
    ///
    /// Host bits in the address are cleared, so "10.0.0.7/24" yields 10.0.0.0/24.
    pub fn parse(cidr: &str) -> Result<AddressInterval, ParseError> {
        let cidr = cidr.trim();
        let (addr_part, len_part) = match cidr.split_once('/') {
            Some((a, l)) if !l.contains('/') => (a, l),
            _ => return Err(ParseError::InvalidFormat(cidr.to_string())),
        };

        let addr: Ipv4Addr = addr_part
            .parse()
            .map_err(|_| ParseError::InvalidAddress(cidr.to_string()))?;

        if len_part.is_empty() || !len_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidPrefixLength(cidr.to_string()));
        }
        let prefix_len: u8 = len_part
            .parse()
            .map_err(|_| ParseError::InvalidPrefixLength(cidr.to_string()))?;
        let mask = get_cidr_mask(prefix_len)
            .ok_or_else(|| ParseError::InvalidPrefixLength(cidr.to_string()))?;

        let bits = u32::from(addr);
        Ok(AddressInterval {
            first: network_addr(bits, mask),
            last: broadcast_addr(bits, mask),
            prefix_len,
        })
    }

    /// Subnet mask as u32.
    pub fn mask(&self) -> u32 {
        // prefix_len is validated on construction
        get_cidr_mask(self.prefix_len).unwrap_or(u32::MAX)
    }

    /// Lowest address as [`Ipv4Addr`].
    pub fn lo(&self) -> Ipv4Addr {
        u32_to_ip(self.first)
    }

    /// Highest address as [`Ipv4Addr`].
    pub fn hi(&self) -> Ipv4Addr {
        u32_to_ip(self.last)
    }

    /// True if every address of `other` lies inside `self`.
    pub fn covers(&self, other: &AddressInterval) -> bool {
        self.first <= other.first && other.last <= self.last
    }
}

impl FromStr for AddressInterval {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AddressInterval::parse(s)
    }
}

impl std::fmt::Display for AddressInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.lo(), self.prefix_len)
    }
}

impl Serialize for AddressInterval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AddressInterval {
    fn deserialize<D>(deserializer: D) -> Result<AddressInterval, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        AddressInterval::parse(&s).map_err(de::Error::custom)
    }
}
