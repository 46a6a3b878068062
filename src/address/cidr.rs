//! CIDR blocks expanded to closed integer ranges

use super::{ip_value, Address};
use crate::error::{DevbenchError, Result};
use crate::types::AddressFamily;
use ipnetwork::IpNetwork;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// A CIDR block expanded to its closed range `[lower, upper]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CidrBlock {
    network: IpNetwork,
    lower: u128,
    upper: u128,
}

impl CidrBlock {
    /// Parse `base/prefix` notation.
    ///
    /// Host bits set in the base address are masked off, so `1.2.3.4/8`
    /// denotes `1.0.0.0/8`. A bare address without a prefix is rejected.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let invalid = || DevbenchError::validation(format!("'{}' is not a valid CIDR block", trimmed));

        if !trimmed.contains('/') {
            return Err(invalid());
        }
        let parsed = IpNetwork::from_str(trimmed).map_err(|_| invalid())?;
        let network = IpNetwork::new(parsed.network(), parsed.prefix()).map_err(|_| invalid())?;
        Ok(Self::from_network(network))
    }

    fn from_network(network: IpNetwork) -> Self {
        let family_bits = u32::from(family_of(&network).bits());
        let host_bits = family_bits - u32::from(network.prefix());
        let host_mask = match host_bits {
            0 => 0,
            n => u128::MAX >> (128 - n),
        };
        let lower = ip_value(network.network());

        Self {
            network,
            lower,
            upper: lower | host_mask,
        }
    }

    /// Address family of the block
    pub fn family(&self) -> AddressFamily {
        family_of(&self.network)
    }

    /// First address of the block on the family's integer scale
    pub fn lower(&self) -> u128 {
        self.lower
    }

    /// Last address of the block on the family's integer scale
    pub fn upper(&self) -> u128 {
        self.upper
    }

    /// First address of the block
    pub fn first_address(&self) -> Address {
        Address::from(self.network.network())
    }

    /// Last address of the block
    pub fn last_address(&self) -> Address {
        let ip = match self.network {
            // upper never exceeds u32::MAX for an IPv4 block
            IpNetwork::V4(_) => IpAddr::V4(Ipv4Addr::from(self.upper as u32)),
            IpNetwork::V6(_) => IpAddr::V6(Ipv6Addr::from(self.upper)),
        };
        Address::from(ip)
    }
}

fn family_of(network: &IpNetwork) -> AddressFamily {
    match network {
        IpNetwork::V4(_) => AddressFamily::V4,
        IpNetwork::V6(_) => AddressFamily::V6,
    }
}

impl FromStr for CidrBlock {
    type Err = DevbenchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.network)
    }
}
