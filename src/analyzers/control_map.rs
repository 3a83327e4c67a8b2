//! Control and permission mapping: who can act on the contract, and how.

use std::sync::Arc;

use crate::heuristics::{normalize_bytecode, patterns, SelectorSet};
use crate::models::{
    AdminPattern, AdminPower, Capability, Controls, Permission, Upgradeability, UpgradePattern,
    ACTOR_ADMIN,
};
use crate::signatures::SignatureRegistry;

const SCOPE_GLOBAL: &str = "global";

pub struct ControlMap {
    signatures: Arc<SignatureRegistry>,
}

impl ControlMap {
    pub fn new(signatures: Arc<SignatureRegistry>) -> Self {
        Self { signatures }
    }

    /// Map proxy pattern, admin-authority pattern and permissions.
    ///
    /// The admin-power rating is filled in by the aggregator; here it starts
    /// at its neutral value.
    pub fn detect(&self, bytecode: &str, selectors: &SelectorSet) -> Controls {
        let sigs = &self.signatures;
        let code = normalize_bytecode(bytecode);

        let pattern = self.detect_proxy_pattern(&code, selectors);
        let admin_pattern = self.detect_admin_pattern(selectors);

        let mut permissions = Vec::new();

        // Delegatecall is benign and expected inside a recognized proxy;
        // the same opcode signature outside one is an uncontrolled risk.
        if pattern == UpgradePattern::None
            && patterns::contains_delegatecall_sequence(&code, &sigs.patterns)
        {
            permissions.push(Permission {
                actor_id: ACTOR_ADMIN.to_string(),
                capability: Capability::Delegatecall,
                scope: SCOPE_GLOBAL.to_string(),
                revocable: false,
            });
        }

        if selectors.contains(&sigs.admin.transfer_ownership) {
            permissions.push(Permission {
                actor_id: ACTOR_ADMIN.to_string(),
                capability: Capability::Upgrade,
                scope: SCOPE_GLOBAL.to_string(),
                // renounceOwnership typically accompanies transferOwnership
                revocable: true,
            });
        }

        if selectors.contains(&sigs.admin.pause) {
            permissions.push(Permission {
                actor_id: ACTOR_ADMIN.to_string(),
                capability: Capability::Pause,
                scope: SCOPE_GLOBAL.to_string(),
                revocable: true,
            });
        }

        if selectors.contains_any(&sigs.admin.blacklist_variants) {
            permissions.push(Permission {
                actor_id: ACTOR_ADMIN.to_string(),
                capability: Capability::Blacklist,
                scope: SCOPE_GLOBAL.to_string(),
                revocable: true,
            });
        }

        Controls {
            permissions,
            upgradeability: Upgradeability {
                pattern,
                upgrade_authority: (pattern != UpgradePattern::None)
                    .then(|| ACTOR_ADMIN.to_string()),
                timelock_seconds: None,
                upgrade_history_count: 0,
                admin_pattern,
            },
            admin_power: AdminPower::Zero,
        }
    }

    /// Proxy-pattern ladder, most specific first.
    fn detect_proxy_pattern(&self, code: &str, selectors: &SelectorSet) -> UpgradePattern {
        let sigs = &self.signatures;

        if selectors.contains(&sigs.proxy.proxiable_uuid) {
            UpgradePattern::Uups
        } else if selectors.contains(&sigs.proxy.implementation) {
            UpgradePattern::Beacon
        } else if selectors.contains(&sigs.proxy.facets)
            || selectors.contains(&sigs.proxy.facet_address)
        {
            UpgradePattern::Diamond
        } else if patterns::contains_minimal_proxy_template(code, &sigs.patterns) {
            UpgradePattern::MinimalProxy
        } else if selectors.contains(&sigs.proxy.upgrade_to) {
            UpgradePattern::TransparentProxy
        } else {
            UpgradePattern::None
        }
    }

    /// Admin-authority ladder: who holds power, not whether they can act.
    fn detect_admin_pattern(&self, selectors: &SelectorSet) -> AdminPattern {
        let sigs = &self.signatures;

        if selectors.contains(&sigs.authority.grant_role)
            || selectors.contains(&sigs.authority.revoke_role)
            || selectors.contains(&sigs.authority.has_role)
        {
            AdminPattern::AccessControl
        } else if selectors.contains(&sigs.authority.get_owners)
            && selectors.contains(&sigs.authority.get_threshold)
        {
            AdminPattern::Multisig
        } else if selectors.contains(&sigs.authority.get_min_delay)
            || selectors.contains(&sigs.authority.delay)
            || selectors.contains(&sigs.authority.queue_transaction)
        {
            AdminPattern::Timelock
        } else if selectors.contains(&sigs.admin.rely) && selectors.contains(&sigs.admin.deny) {
            AdminPattern::Custom
        } else if selectors.contains(&sigs.admin.owner)
            || selectors.contains(&sigs.admin.proxy_admin)
        {
            AdminPattern::Ownable
        } else {
            AdminPattern::None
        }
    }
}
