//! Selector and byte-pattern tables the detectors match against.
//!
//! Everything the classifiers look for in bytecode lives here as plain
//! immutable data, injected at construction. Tests can build a synthetic
//! registry instead of patching detector logic.

/// ERC20-style token selectors.
#[derive(Debug, Clone)]
pub struct TokenSignatures {
    /// transfer(address,uint256)
    pub transfer: String,
    /// transferFrom(address,address,uint256)
    pub transfer_from: String,
    /// mint(address,uint256)
    pub mint: String,
    /// burn(uint256)
    pub burn: String,
}

/// Wrapped-asset (WETH-style) selectors.
#[derive(Debug, Clone)]
pub struct WrapperSignatures {
    /// deposit() - payable, zero arguments
    pub deposit: String,
    /// withdraw(uint256)
    pub withdraw: String,
}

/// Administrative control selectors.
#[derive(Debug, Clone)]
pub struct AdminSignatures {
    /// owner()
    pub owner: String,
    /// admin() - transparent-proxy admin getter
    pub proxy_admin: String,
    /// transferOwnership(address)
    pub transfer_ownership: String,
    /// pause()
    pub pause: String,
    /// unpause()
    pub unpause: String,
    /// addToBlacklist(address) and addBlackList(address) - USDC/Tether variants
    pub blacklist_variants: Vec<String>,
    /// rely(address) - MakerDAO-style authority grant
    pub rely: String,
    /// deny(address) - MakerDAO-style authority revoke
    pub deny: String,
}

/// Proxy-pattern marker selectors.
#[derive(Debug, Clone)]
pub struct ProxySignatures {
    /// upgradeTo(address)
    pub upgrade_to: String,
    /// proxiableUUID() - EIP-1822 UUPS
    pub proxiable_uuid: String,
    /// implementation() - beacon getter
    pub implementation: String,
    /// facets() - EIP-2535 diamond
    pub facets: String,
    /// facetAddress(bytes4) - EIP-2535 diamond
    pub facet_address: String,
}

/// Admin-authority pattern getters (who holds power, not whether they can act).
#[derive(Debug, Clone)]
pub struct AuthoritySignatures {
    /// grantRole(bytes32,address)
    pub grant_role: String,
    /// revokeRole(bytes32,address)
    pub revoke_role: String,
    /// hasRole(bytes32,address)
    pub has_role: String,
    /// getOwners() - Gnosis Safe
    pub get_owners: String,
    /// getThreshold() - Gnosis Safe
    pub get_threshold: String,
    /// getMinDelay() - OZ TimelockController
    pub get_min_delay: String,
    /// delay() - Compound Timelock
    pub delay: String,
    /// queueTransaction(address,uint256,string,bytes,uint256)
    pub queue_transaction: String,
}

/// Incentive-model selectors.
#[derive(Debug, Clone)]
pub struct IncentiveSignatures {
    /// sharesOf(address) - rebasing share accounting
    pub shares_of: String,
    /// getRate() - rebasing exchange rate
    pub get_rate: String,
    /// getFee() - fee-on-transfer
    pub get_fee: String,
    /// taxRate() - fee-on-transfer
    pub tax_rate: String,
    /// reflect(uint256) - SafeMoon-style redistribution
    pub reflect: String,
}

/// Raw byte patterns matched as bytecode substrings, not selectors.
#[derive(Debug, Clone)]
pub struct BytecodePatterns {
    /// EIP-1167 minimal-proxy template, head (before the embedded address).
    pub minimal_proxy_prefix: String,
    /// EIP-1167 minimal-proxy template, tail (after the embedded address).
    pub minimal_proxy_suffix: String,
    /// DELEGATECALL (0xf4) followed by a common successor opcode. Adjacency
    /// pairs bound false positives without real disassembly.
    pub delegatecall_sequences: Vec<String>,
}

/// The complete matching configuration for one engine instance.
#[derive(Debug, Clone)]
pub struct SignatureRegistry {
    pub token: TokenSignatures,
    pub wrapper: WrapperSignatures,
    pub admin: AdminSignatures,
    pub proxy: ProxySignatures,
    pub authority: AuthoritySignatures,
    pub incentive: IncentiveSignatures,
    pub patterns: BytecodePatterns,
}

impl SignatureRegistry {
    /// The well-known mainnet signature set.
    pub fn standard() -> Self {
        Self {
            token: TokenSignatures {
                transfer: "0xa9059cbb".into(),
                transfer_from: "0x23b872dd".into(),
                mint: "0x40c10f19".into(),
                burn: "0x42966c68".into(),
            },
            wrapper: WrapperSignatures {
                deposit: "0xd0e30db0".into(),
                withdraw: "0x2e1a7d4d".into(),
            },
            admin: AdminSignatures {
                owner: "0x8da5cb5b".into(),
                proxy_admin: "0xf851a440".into(),
                transfer_ownership: "0xf2fde38b".into(),
                pause: "0x8456cb59".into(),
                unpause: "0x3f4ba83a".into(),
                blacklist_variants: vec!["0xf9f92be4".into(), "0x347c4846".into()],
                rely: "0x65fae35e".into(),
                deny: "0x9c52a7f1".into(),
            },
            proxy: ProxySignatures {
                upgrade_to: "0x3659cfe6".into(),
                proxiable_uuid: "0x52d1902d".into(),
                implementation: "0x5c60da1b".into(),
                facets: "0x7a0ed627".into(),
                facet_address: "0xcdffacc6".into(),
            },
            authority: AuthoritySignatures {
                grant_role: "0x2f2ff15d".into(),
                revoke_role: "0xd547741f".into(),
                has_role: "0x91d14854".into(),
                get_owners: "0xa0e67e2b".into(),
                get_threshold: "0xe75235b8".into(),
                get_min_delay: "0xf27a0c92".into(),
                delay: "0x6a42b8f8".into(),
                queue_transaction: "0x3a66f901".into(),
            },
            incentive: IncentiveSignatures {
                shares_of: "0xf028880c".into(),
                get_rate: "0x679d9435".into(),
                get_fee: "0xb800589d".into(),
                tax_rate: "0x1922c0d5".into(),
                reflect: "0x36b000ea".into(),
            },
            patterns: BytecodePatterns {
                minimal_proxy_prefix: "363d3d373d3d3d363d73".into(),
                minimal_proxy_suffix: "5af43d82803e903d91602b57fd5bf3".into(),
                delegatecall_sequences: vec![
                    "f43d".into(), // DELEGATECALL RETURNDATASIZE
                    "f490".into(), // DELEGATECALL SWAP1
                    "f450".into(), // DELEGATECALL POP
                    "f415".into(), // DELEGATECALL ISZERO
                    "f460".into(), // DELEGATECALL PUSH1
                ],
            },
        }
    }
}

impl Default for SignatureRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_selectors_are_normalized() {
        let registry = SignatureRegistry::standard();

        let all = [
            &registry.token.transfer,
            &registry.token.transfer_from,
            &registry.token.mint,
            &registry.token.burn,
            &registry.wrapper.deposit,
            &registry.wrapper.withdraw,
            &registry.admin.owner,
            &registry.proxy.upgrade_to,
            &registry.authority.grant_role,
            &registry.incentive.reflect,
        ];

        for selector in all {
            assert!(selector.starts_with("0x"), "{selector} missing 0x prefix");
            assert_eq!(selector.len(), 10, "{selector} is not 4 bytes");
            assert_eq!(selector.to_lowercase(), **selector, "{selector} not lower-case");
        }
    }

    #[test]
    fn raw_patterns_are_lower_case_hex() {
        let registry = SignatureRegistry::standard();
        for pattern in registry
            .patterns
            .delegatecall_sequences
            .iter()
            .chain([&registry.patterns.minimal_proxy_prefix, &registry.patterns.minimal_proxy_suffix])
        {
            assert!(pattern.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }
}
