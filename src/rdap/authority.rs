//! RDAP authority index.
//!
//! Maps every point of the IPv4 and IPv6 address spaces covered by the
//! bootstrap registries to the RDAP base URI authoritative for it. Each
//! family is kept as a sorted table of disjoint closed ranges, queried by
//! binary search. The index is immutable once built and can be shared across
//! threads without locking.

use crate::address::{Address, CidrBlock};
use crate::error::{DevbenchError, Result};
use crate::rdap::bootstrap::{load_registry_file, ServiceEntry};
use crate::types::AddressFamily;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use url::Url;

#[derive(Debug, Clone)]
struct Segment {
    lower: u128,
    upper: u128,
    uri: Arc<Url>,
}

/// Sorted, disjoint ranges of one address family
#[derive(Debug, Default)]
struct RangeTable {
    segments: Vec<Segment>,
}

impl RangeTable {
    fn find(&self, value: u128) -> Option<&Url> {
        let idx = self.segments.partition_point(|s| s.lower <= value);
        let segment = self.segments.get(idx.checked_sub(1)?)?;
        (value <= segment.upper).then(|| segment.uri.as_ref())
    }
}

/// Accumulates ranges in insertion order.
///
/// A later range overwrites earlier ones wherever they overlap; earlier
/// ranges survive outside the overlap, split if necessary.
#[derive(Debug, Default)]
struct RangePainter {
    ranges: BTreeMap<u128, (u128, Arc<Url>)>,
    inserted: usize,
}

impl RangePainter {
    fn paint(&mut self, lower: u128, upper: u128, uri: Arc<Url>) {
        // Disjoint ranges sorted by lower bound are also sorted by upper bound,
        // so walking backwards from `upper` finds every overlap.
        let overlapping: Vec<(u128, u128)> = self
            .ranges
            .range(..=upper)
            .rev()
            .take_while(|(_, (end, _))| *end >= lower)
            .map(|(start, (end, _))| (*start, *end))
            .collect();

        for (start, end) in overlapping {
            let Some((_, previous)) = self.ranges.remove(&start) else {
                continue;
            };
            if start < lower {
                self.ranges.insert(start, (lower - 1, Arc::clone(&previous)));
            }
            if end > upper {
                self.ranges.insert(upper + 1, (end, previous));
            }
        }

        self.ranges.insert(lower, (upper, uri));
        self.inserted += 1;
    }

    fn finish(self) -> RangeTable {
        RangeTable {
            segments: self
                .ranges
                .into_iter()
                .map(|(lower, (upper, uri))| Segment { lower, upper, uri })
                .collect(),
        }
    }
}

/// Builder for [`AuthorityIndex`]; the only way to obtain one
#[derive(Debug, Default)]
pub struct AuthorityIndexBuilder {
    v4: RangePainter,
    v6: RangePainter,
}

impl AuthorityIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a single CIDR block to an authority
    pub fn insert(&mut self, block: CidrBlock, uri: Url) -> &mut Self {
        self.insert_shared(&block, Arc::new(uri));
        self
    }

    /// Flatten a service entry, one range per CIDR block, all sharing its URI
    pub fn add_entry(&mut self, entry: &ServiceEntry) -> &mut Self {
        let uri = Arc::new(entry.uri.clone());
        for block in &entry.blocks {
            self.insert_shared(block, Arc::clone(&uri));
        }
        self
    }

    pub fn add_entries<'a, I>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a ServiceEntry>,
    {
        for entry in entries {
            self.add_entry(entry);
        }
        self
    }

    fn insert_shared(&mut self, block: &CidrBlock, uri: Arc<Url>) {
        let painter = match block.family() {
            AddressFamily::V4 => &mut self.v4,
            AddressFamily::V6 => &mut self.v6,
        };
        tracing::trace!(
            block = %block,
            first = %block.first_address(),
            last = %block.last_address(),
            uri = %uri,
            "Painting authority range"
        );
        painter.paint(block.lower(), block.upper(), uri);
    }

    /// Freeze the accumulated ranges into an immutable index
    pub fn build(self) -> AuthorityIndex {
        for (family, painter) in [(AddressFamily::V4, &self.v4), (AddressFamily::V6, &self.v6)] {
            if painter.inserted == 0 {
                tracing::warn!(family = %family, "No RDAP authorities loaded; every lookup in this family will miss");
            }
        }

        let index = AuthorityIndex {
            v4: self.v4.finish(),
            v6: self.v6.finish(),
        };

        tracing::info!(
            ipv4_ranges = index.v4.segments.len(),
            ipv6_ranges = index.v6.segments.len(),
            "RDAP authority index ready"
        );

        index
    }
}

/// Immutable address-to-authority index over both address families
#[derive(Debug)]
pub struct AuthorityIndex {
    v4: RangeTable,
    v6: RangeTable,
}

impl AuthorityIndex {
    pub fn builder() -> AuthorityIndexBuilder {
        AuthorityIndexBuilder::new()
    }

    /// Build from already-parsed IPv4 and IPv6 service entries.
    ///
    /// Entries are inserted IPv4 first, then IPv6, each in document order.
    pub fn build(ipv4: &[ServiceEntry], ipv6: &[ServiceEntry]) -> Self {
        let mut builder = Self::builder();
        builder.add_entries(ipv4).add_entries(ipv6);
        builder.build()
    }

    /// Load both bootstrap documents from disk and build the index.
    ///
    /// A malformed document fails the whole build.
    pub fn from_bootstrap_files(ipv4_path: &Path, ipv6_path: &Path) -> Result<Self> {
        let ipv4 = load_registry_file(ipv4_path, AddressFamily::V4)?;
        let ipv6 = load_registry_file(ipv6_path, AddressFamily::V6)?;
        Ok(Self::build(&ipv4, &ipv6))
    }

    /// Find the RDAP base URI authoritative for `address`
    pub fn resolve(&self, address: &Address) -> Result<&Url> {
        self.table(address.family())
            .find(address.value())
            .ok_or_else(|| DevbenchError::authority_not_found(address.to_string()))
    }

    /// RDAP IP network query URL (`<base>ip/<address>`) for `address`
    pub fn rdap_ip_url(&self, address: &Address) -> Result<Url> {
        let base = self.resolve(address)?;
        base.join(&format!("ip/{}", address))
            .map_err(|e| crate::internal_error!("Failed to build RDAP URL from {}: {}", base, e))
    }

    /// Number of disjoint ranges held for one family
    pub fn family_len(&self, family: AddressFamily) -> usize {
        self.table(family).segments.len()
    }

    /// Number of disjoint ranges held across both families
    pub fn len(&self) -> usize {
        self.v4.segments.len() + self.v6.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn table(&self, family: AddressFamily) -> &RangeTable {
        match family {
            AddressFamily::V4 => &self.v4,
            AddressFamily::V6 => &self.v6,
        }
    }
}
