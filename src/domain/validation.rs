//! Validation Rules
//!
//! Pure checks run on creation input before any store access.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

// `[[:word:]]` is the ASCII-only `\w`
lazy_static! {
    /// A word character followed by word characters, hyphens or underscores
    static ref NETWORK_NAME_REGEX: Regex =
        Regex::new(r"^[[:word:]][[:word:]\-_]+$").expect("valid regex");

    /// A word character followed by word characters, hyphens, underscores,
    /// spaces or apostrophes
    static ref USER_NAME_REGEX: Regex =
        Regex::new(r"^[[:word:]][\-[:word:]_ ']+$").expect("valid regex");
}

/// Longest network or user name, matching the `VARCHAR(255)` key columns
pub const MAX_NAME_LEN: usize = 255;

/// Why a piece of creation input was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct InvalidInput(String);

impl InvalidInput {
    #[must_use]
    pub fn message(&self) -> &str {
        &self.0
    }
}

pub fn validate_network_name(name: &str) -> Result<(), InvalidInput> {
    if name.len() <= MAX_NAME_LEN && NETWORK_NAME_REGEX.is_match(name) {
        Ok(())
    } else {
        Err(InvalidInput(format!("Invalid network name '{name}'")))
    }
}

pub fn validate_user_name(name: &str) -> Result<(), InvalidInput> {
    if name.len() <= MAX_NAME_LEN && USER_NAME_REGEX.is_match(name) {
        Ok(())
    } else {
        Err(InvalidInput(format!("Invalid user name '{name}'")))
    }
}

/// A network must define at least one address range.
pub fn require_address_range(
    ipv4_cidr: Option<&str>,
    ipv6_cidr: Option<&str>,
) -> Result<(), InvalidInput> {
    if ipv4_cidr.is_none() && ipv6_cidr.is_none() {
        return Err(InvalidInput("Must have at least one IP range defined".to_string()));
    }
    Ok(())
}

pub fn validate_ipv4_cidr(cidr: &str) -> Result<(), InvalidInput> {
    if is_prefix::<Ipv4Addr>(cidr, 32) {
        Ok(())
    } else {
        Err(InvalidInput(format!("Invalid IPv4 CIDR '{cidr}'")))
    }
}

pub fn validate_ipv6_cidr(cidr: &str) -> Result<(), InvalidInput> {
    if is_prefix::<Ipv6Addr>(cidr, 128) {
        Ok(())
    } else {
        Err(InvalidInput(format!("Invalid IPv6 CIDR '{cidr}'")))
    }
}

fn is_prefix<A: FromStr>(cidr: &str, max_bits: u8) -> bool {
    let Some((address, bits)) = cidr.split_once('/') else {
        return false;
    };
    // u8::from_str accepts a leading '+'
    if bits.is_empty() || !bits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    A::from_str(address).is_ok() && bits.parse::<u8>().is_ok_and(|b| b <= max_bits)
}
