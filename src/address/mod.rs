//! Validated IP addresses and CIDR blocks on an integer scale.
//!
//! Every address maps to an unsigned integer (32-bit for IPv4, 128-bit for
//! IPv6, both widened to `u128`). Ordering and containment are defined on
//! that value, never on the textual form.

pub mod cidr;

pub use cidr::CidrBlock;

use crate::error::{DevbenchError, Result};
use crate::types::AddressFamily;
use serde::Serialize;
use std::net::{IpAddr, Ipv6Addr};
use std::str::FromStr;

/// A validated IPv4 or IPv6 address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Address(IpAddr);

impl Address {
    /// Parse and validate an address literal.
    ///
    /// Surrounding whitespace is ignored and IPv6 literals may be bracketed
    /// (`[2001:db8::1]`). Blank input and anything that is not a syntactically
    /// valid IPv4 or IPv6 address is rejected.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DevbenchError::validation("IP address cannot be empty"));
        }

        // Brackets are only valid around IPv6 literals.
        if let Some(inner) = trimmed.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            if let Ok(v6) = inner.parse::<Ipv6Addr>() {
                return Ok(Self(IpAddr::V6(v6)));
            }
        }

        trimmed.parse::<IpAddr>().map(Self).map_err(|_| {
            DevbenchError::validation(format!(
                "'{}' is not a valid IPv4 or IPv6 address",
                trimmed
            ))
        })
    }

    /// Address family of this address
    pub fn family(&self) -> AddressFamily {
        match self.0 {
            IpAddr::V4(_) => AddressFamily::V4,
            IpAddr::V6(_) => AddressFamily::V6,
        }
    }

    /// Position of this address on its family's integer scale
    pub fn value(&self) -> u128 {
        ip_value(self.0)
    }

    /// The underlying standard library address
    pub fn ip(&self) -> IpAddr {
        self.0
    }

    /// Unwrap IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) to plain IPv4.
    ///
    /// Dual-stack listeners report IPv4 peers in mapped form.
    pub fn canonical(&self) -> Self {
        match self.0 {
            IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
                Some(v4) => Self(IpAddr::V4(v4)),
                None => *self,
            },
            IpAddr::V4(_) => *self,
        }
    }
}

pub(crate) fn ip_value(ip: IpAddr) -> u128 {
    match ip {
        IpAddr::V4(v4) => u128::from(u32::from(v4)),
        IpAddr::V6(v6) => u128::from(v6),
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        Self(ip)
    }
}

impl FromStr for Address {
    type Err = DevbenchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ipv4() {
        let addr = Address::parse("8.8.8.8").unwrap();
        assert_eq!(addr.family(), AddressFamily::V4);
        assert_eq!(addr.value(), 0x0808_0808);
        assert_eq!(addr.to_string(), "8.8.8.8");
    }

    #[test]
    fn test_parse_ipv6() {
        let addr = Address::parse(" [2001:db8::1] ").unwrap();
        assert_eq!(addr.family(), AddressFamily::V6);
        assert_eq!(addr.value(), 0x2001_0db8_0000_0000_0000_0000_0000_0001);
    }

    #[test]
    fn test_rejects_blank_and_garbage() {
        for input in ["", "   ", "1.2.3", "256.1.1.1", "example.com", "2001:db8:::1", "1.2.3.4/8"] {
            let err = Address::parse(input).unwrap_err();
            assert!(matches!(err, DevbenchError::Validation { .. }), "{input}");
        }
    }

    #[test]
    fn test_brackets_only_around_ipv6() {
        assert!(Address::parse("[::1]").is_ok());
        for input in ["[1.2.3.4]", "[8.8.8.8]", "[]", "[2001:db8::1", "2001:db8::1]"] {
            let err = Address::parse(input).unwrap_err();
            assert!(matches!(err, DevbenchError::Validation { .. }), "{input}");
        }
    }

    #[test]
    fn test_ordering_follows_integer_value() {
        let a = Address::parse("9.255.255.255").unwrap();
        let b = Address::parse("10.0.0.0").unwrap();
        assert!(a.value() < b.value());
        assert!(a < b);
    }

    #[test]
    fn test_canonical_unwraps_mapped_v4() {
        let mapped = Address::parse("::ffff:192.0.2.7").unwrap();
        assert_eq!(mapped.family(), AddressFamily::V6);
        assert_eq!(mapped.canonical(), Address::parse("192.0.2.7").unwrap());

        let plain = Address::parse("2001:db8::1").unwrap();
        assert_eq!(plain.canonical(), plain);
    }
}
