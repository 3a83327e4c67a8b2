//! Raw byte-pattern matchers for proxy templates and delegatecall.

use crate::signatures::BytecodePatterns;

/// True when the bytecode embeds the EIP-1167 minimal-proxy template.
///
/// Both halves of the template must be present; the deployed implementation
/// address sits between them and is ignored. Input must already be
/// normalized (lower-case, no `0x` prefix).
pub fn contains_minimal_proxy_template(code: &str, patterns: &BytecodePatterns) -> bool {
    code.contains(&patterns.minimal_proxy_prefix) && code.contains(&patterns.minimal_proxy_suffix)
}

/// True when a raw DELEGATECALL opcode sequence appears in the bytecode.
///
/// Matches the delegatecall byte followed by one of a small set of common
/// successor opcodes, aligned to an even offset so the pair sits on a byte
/// boundary. Still a heuristic: PUSH data can alias an aligned opcode pair.
pub fn contains_delegatecall_sequence(code: &str, patterns: &BytecodePatterns) -> bool {
    patterns
        .delegatecall_sequences
        .iter()
        .any(|seq| code.match_indices(seq.as_str()).any(|(i, _)| i % 2 == 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signatures::SignatureRegistry;

    fn patterns() -> BytecodePatterns {
        SignatureRegistry::standard().patterns
    }

    const MINIMAL_PROXY: &str =
        "363d3d373d3d3d363d73bebebebebebebebebebebebebebebebebebebebe5af43d82803e903d91602b57fd5bf3";

    #[test]
    fn detects_minimal_proxy_template() {
        assert!(contains_minimal_proxy_template(MINIMAL_PROXY, &patterns()));
    }

    #[test]
    fn requires_both_template_halves() {
        assert!(!contains_minimal_proxy_template(
            "363d3d373d3d3d363d73bebebebebebebebebebebebebebebebebebebebe",
            &patterns()
        ));
        assert!(!contains_minimal_proxy_template(
            "5af43d82803e903d91602b57fd5bf3",
            &patterns()
        ));
    }

    #[test]
    fn detects_aligned_delegatecall_pair() {
        // ... DELEGATECALL RETURNDATASIZE ... on a byte boundary
        assert!(contains_delegatecall_sequence("6000f43d00", &patterns()));
    }

    #[test]
    fn ignores_odd_offset_match() {
        // "f43d" appears only straddling two byte cells: 6f 43 d0
        assert!(!contains_delegatecall_sequence("6f43d0", &patterns()));
    }

    #[test]
    fn plain_code_has_no_delegatecall() {
        assert!(!contains_delegatecall_sequence("60006001016000f3", &patterns()));
    }
}
