//! Chain connectivity: bytecode retrieval and network discovery.
//!
//! The classification core never touches this module; it consumes only the
//! `(bytecode, selectors)` pair plus chain identity these helpers produce.

pub mod client;
pub mod scanner;

pub use client::ChainClient;
pub use scanner::{ChainEndpoint, ChainScanner, PUBLIC_ENDPOINTS};

use ethers::types::Address;

use crate::utils::{ExplainerError, Result};

/// Parse a checksum-agnostic `0x`-prefixed 40-hex-char address.
pub fn parse_address(raw: &str) -> Result<Address> {
    let trimmed = raw.trim();
    let body = trimmed.strip_prefix("0x").unwrap_or("");
    if body.len() != 40 || !body.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ExplainerError::InvalidAddress(raw.to_string()));
    }
    trimmed
        .parse()
        .map_err(|_| ExplainerError::InvalidAddress(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_any_casing() {
        assert!(parse_address("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2").is_ok());
        assert!(parse_address("0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2").is_ok());
    }

    #[test]
    fn rejects_bad_formats() {
        assert!(parse_address("").is_err());
        assert!(parse_address("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2").is_err());
        assert!(parse_address("0x1234").is_err());
        assert!(parse_address("0xZZZaaa39b223fe8d0a0e5c4f27ead9083c756cc2").is_err());
    }
}
