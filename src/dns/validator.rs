//! DNS query name validation

use crate::address::Address;
use crate::error::{DevbenchError, Result};
use regex::Regex;
use std::net::IpAddr;

/// Maximum length of a presentation-format name without the trailing dot
const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Validator for names submitted to the DNS-over-HTTPS endpoint
pub struct NameValidator {
    label_pattern: Regex,
}

impl NameValidator {
    /// Create a new name validator
    pub fn new() -> Result<Self> {
        // Underscores are allowed for service labels such as `_dmarc` and `_sip._tcp`.
        let label_pattern = Regex::new(r"^[a-z0-9_]([a-z0-9_-]*[a-z0-9_])?$")
            .map_err(|e| crate::internal_error!("Invalid label pattern: {}", e))?;
        Ok(Self { label_pattern })
    }

    /// Validate and normalize a query name.
    ///
    /// Names are lowercased and a single trailing dot is dropped. The root
    /// name `.` is accepted as-is.
    pub fn validate(&self, name: &str) -> Result<String> {
        let name = name.trim().to_lowercase();

        if name.is_empty() {
            return Err(DevbenchError::validation("Query name cannot be empty"));
        }
        if name == "." {
            return Ok(name);
        }

        let name = name.strip_suffix('.').unwrap_or(&name).to_string();

        if name.len() > MAX_NAME_LEN {
            return Err(DevbenchError::validation("Query name too long (max 253 characters)"));
        }
        if name.starts_with('.') || name.contains("..") {
            return Err(DevbenchError::validation("Query name cannot contain empty labels"));
        }

        for label in name.split('.') {
            if label.len() > MAX_LABEL_LEN {
                return Err(DevbenchError::validation(format!(
                    "Label '{}' too long (max 63 characters)",
                    label
                )));
            }
            if !self.label_pattern.is_match(label) {
                return Err(DevbenchError::validation(format!(
                    "Label '{}' contains invalid characters or starts/ends with a hyphen",
                    label
                )));
            }
        }

        Ok(name)
    }

}

/// Reverse-lookup name for an address (`in-addr.arpa` / `ip6.arpa`)
pub fn reverse_name(address: &Address) -> String {
    match address.ip() {
        IpAddr::V4(v4) => {
            let [a, b, c, d] = v4.octets();
            format!("{}.{}.{}.{}.in-addr.arpa", d, c, b, a)
        }
        IpAddr::V6(v6) => {
            let mut labels: Vec<String> = v6
                .octets()
                .iter()
                .flat_map(|byte| [byte >> 4, byte & 0x0f])
                .map(|nibble| format!("{:x}", nibble))
                .collect();
            labels.reverse();
            format!("{}.ip6.arpa", labels.join("."))
        }
    }
}
