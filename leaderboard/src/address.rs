use crate::LeaderboardError;
use sha3::{Digest, Keccak256};
use std::fmt;
use std::str::FromStr;

const HEX_DIGITS: usize = 40;

/// A validated score-contract address (`0x` + 40 hex digits, not all zero)
///
/// Always held in EIP-55 checksum case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContractAddress(String);

impl ContractAddress {
    /// Validate and normalise to checksum case
    ///
    /// All-lowercase or all-uppercase digits are accepted as is; mixed case
    /// must already be a correct checksum.
    pub fn parse(raw: &str) -> Result<Self, LeaderboardError> {
        let raw = raw.trim();
        let Some(digits) = raw.strip_prefix("0x") else {
            return Err(LeaderboardError::MissingPrefix(raw.to_string()));
        };

        if digits.len() != HEX_DIGITS || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(LeaderboardError::InvalidAddress(raw.to_string()));
        }
        // The zero address is the "not deployed yet" placeholder
        if digits.chars().all(|c| c == '0') {
            return Err(LeaderboardError::NotConfigured);
        }

        let checksummed = to_checksum(digits);
        let mixed_case = digits.chars().any(|c| c.is_ascii_lowercase())
            && digits.chars().any(|c| c.is_ascii_uppercase());
        if mixed_case && checksummed != raw {
            return Err(LeaderboardError::BadChecksum(raw.to_string()));
        }

        Ok(Self(checksummed))
    }

    /// Use the configured address if present and valid, else `fallback`
    pub fn resolve(configured: Option<&str>, fallback: &str) -> Result<Self, LeaderboardError> {
        match configured.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => match Self::parse(raw) {
                Ok(address) => Ok(address),
                Err(err) => {
                    log::warn!("ignoring configured contract address: {err}");
                    Self::parse(fallback)
                }
            },
            None => Self::parse(fallback),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// EIP-55: uppercase each letter whose nibble in keccak256(lowercase hex) is >= 8
fn to_checksum(digits: &str) -> String {
    let lower = digits.to_ascii_lowercase();
    let hash = Keccak256::digest(lower.as_bytes());

    let mut out = String::with_capacity(2 + HEX_DIGITS);
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let byte = hash[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

impl FromStr for ContractAddress {
    type Err = LeaderboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ContractAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
