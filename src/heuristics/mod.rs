//! Approximate bytecode matchers.
//!
//! Everything in this module is textual pattern matching over the hex string,
//! not disassembly. The matchers can over- or under-match when 4-byte values
//! appear as embedded data; that is an accepted precision limit, so each one
//! stays isolated and independently testable.

pub mod patterns;
pub mod selectors;

pub use selectors::{extract_selectors, SelectorSet};

/// Strip an optional `0x` prefix and lower-case the hex body.
pub fn normalize_bytecode(bytecode: &str) -> String {
    let trimmed = bytecode.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    body.to_ascii_lowercase()
}
