//! Function-selector extraction from raw bytecode.

use std::collections::HashSet;

use tracing::debug;

use super::normalize_bytecode;

/// Scan bytecode for 4-byte selector literals.
///
/// Matches the PUSH4 marker (`63`) followed by 8 hex chars anywhere in the
/// hex text and collects the 4-byte value. Returns normalized, lower-cased,
/// `0x`-prefixed selectors with duplicates collapsed in first-seen order.
/// Empty or malformed input yields an empty vec, never an error.
pub fn extract_selectors(bytecode: &str) -> Vec<String> {
    let code = normalize_bytecode(bytecode);
    let bytes = code.as_bytes();

    let mut seen = HashSet::new();
    let mut selectors = Vec::new();
    let mut i = 0;
    while i + 10 <= bytes.len() {
        if bytes[i] == b'6'
            && bytes[i + 1] == b'3'
            && bytes[i + 2..i + 10].iter().all(u8::is_ascii_hexdigit)
        {
            let selector = format!("0x{}", &code[i + 2..i + 10]);
            if seen.insert(selector.clone()) {
                selectors.push(selector);
            }
            i += 10;
        } else {
            i += 1;
        }
    }

    if selectors.is_empty() {
        debug!("no selector literals found in bytecode");
    }
    selectors
}

/// A normalized selector set: stable iteration order, order-independent
/// membership. Classification must never depend on extraction order.
#[derive(Debug, Clone, Default)]
pub struct SelectorSet {
    ordered: Vec<String>,
    index: HashSet<String>,
}

impl SelectorSet {
    /// Build a set from raw selector strings, normalizing each to a
    /// lower-case `0x`-prefixed form and collapsing duplicates stably.
    pub fn new<I, S>(selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for raw in selectors {
            let lowered = raw.as_ref().trim().to_ascii_lowercase();
            let normalized = if lowered.starts_with("0x") {
                lowered
            } else {
                format!("0x{lowered}")
            };
            if set.index.insert(normalized.clone()) {
                set.ordered.push(normalized);
            }
        }
        set
    }

    /// Extract and collect in one step.
    pub fn from_bytecode(bytecode: &str) -> Self {
        Self::new(extract_selectors(bytecode))
    }

    pub fn contains(&self, selector: &str) -> bool {
        self.index.contains(selector)
    }

    pub fn contains_any(&self, selectors: &[String]) -> bool {
        selectors.iter().any(|s| self.contains(s))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_push4_literals() {
        let code = "600063a9059cbb1460005763d0e30db014";
        let selectors = extract_selectors(code);
        assert_eq!(selectors, vec!["0xa9059cbb", "0xd0e30db0"]);
    }

    #[test]
    fn collapses_duplicates_stably() {
        let code = "63a9059cbb63d0e30db063a9059cbb";
        let selectors = extract_selectors(code);
        assert_eq!(selectors, vec!["0xa9059cbb", "0xd0e30db0"]);
    }

    #[test]
    fn handles_prefix_and_case() {
        let selectors = extract_selectors("0x63A9059CBB");
        assert_eq!(selectors, vec!["0xa9059cbb"]);
    }

    #[test]
    fn empty_and_malformed_input_yield_nothing() {
        assert!(extract_selectors("").is_empty());
        assert!(extract_selectors("0x").is_empty());
        assert!(extract_selectors("not bytecode at all").is_empty());
        // `63` marker with too few trailing chars
        assert!(extract_selectors("63a905").is_empty());
        // `63` marker followed by non-hex
        assert!(extract_selectors("63zzzzzzzz").is_empty());
    }

    #[test]
    fn selector_set_membership_is_order_independent() {
        let a = SelectorSet::new(["0xa9059cbb", "0xd0e30db0"]);
        let b = SelectorSet::new(["0xd0e30db0", "0xa9059cbb"]);
        assert!(a.contains("0xa9059cbb") && b.contains("0xa9059cbb"));
        assert!(a.contains("0xd0e30db0") && b.contains("0xd0e30db0"));
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn selector_set_normalizes_members() {
        let set = SelectorSet::new(["A9059CBB", "0xA9059CBB", "0xa9059cbb"]);
        assert_eq!(set.len(), 1);
        assert!(set.contains("0xa9059cbb"));
    }
}
