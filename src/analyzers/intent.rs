//! Intent classification from function selectors.

use std::sync::Arc;

use crate::heuristics::SelectorSet;
use crate::models::{BehaviorTag, Intent};
use crate::signatures::SignatureRegistry;

/// Classifies what a contract is for.
///
/// The base category comes from a priority ladder evaluated top to bottom;
/// the first match fixes the summary. Overlay rules may append further tags
/// afterwards but never change the chosen category. Tag order follows
/// evaluation order and duplicates collapse, so output is deterministic.
pub struct IntentClassifier {
    signatures: Arc<SignatureRegistry>,
}

impl IntentClassifier {
    pub fn new(signatures: Arc<SignatureRegistry>) -> Self {
        Self { signatures }
    }

    pub fn classify(&self, _bytecode: &str, selectors: &SelectorSet) -> Intent {
        let sigs = &self.signatures;

        let has_transfer = selectors.contains(&sigs.token.transfer);
        let has_owner = selectors.contains(&sigs.admin.owner);
        let has_upgrade = selectors.contains(&sigs.proxy.upgrade_to);
        let has_deposit = selectors.contains(&sigs.wrapper.deposit);
        let has_withdraw = selectors.contains(&sigs.wrapper.withdraw);
        let has_blacklist = selectors.contains_any(&sigs.admin.blacklist_variants);
        let has_pause =
            selectors.contains(&sigs.admin.pause) || selectors.contains(&sigs.admin.unpause);

        let mut tags: Vec<BehaviorTag> = Vec::new();
        let mut summary = String::from("Unknown contract behavior.");

        // Base ladder, first match wins. Upgradeability is checked before the
        // custody rules so upgradeable tokens never land in plain custody.
        if has_deposit && has_withdraw && has_transfer {
            push_tag(&mut tags, BehaviorTag::AssetWrapping);
            summary = "Wrap native ETH into an ERC20-compatible token and allow deterministic 1:1 conversion."
                .to_string();
        } else if has_upgrade {
            push_tag(&mut tags, BehaviorTag::Upgradeable);
            push_tag(&mut tags, BehaviorTag::Proxy);
            summary = "Upgradeable Proxy Contract (Logic is delegated).".to_string();
        } else if has_transfer && (has_blacklist || has_pause) {
            push_tag(&mut tags, BehaviorTag::Custody);
            summary = "Centralized Token with administrative controls (Pause/Blacklist).".to_string();
        } else if has_transfer {
            push_tag(&mut tags, BehaviorTag::Custody);
            summary = "Token or Vault contract handling asset transfers.".to_string();
        }

        // Overlays, fixed order, independent of the ladder.
        let has_authority_pair =
            selectors.contains(&sigs.admin.rely) && selectors.contains(&sigs.admin.deny);
        if has_authority_pair || has_owner {
            push_tag(&mut tags, BehaviorTag::GovernanceControlled);
        }

        if selectors.contains(&sigs.token.mint) || selectors.contains(&sigs.token.burn) {
            push_tag(&mut tags, BehaviorTag::MintBurn);
        }

        if has_upgrade {
            push_tag(&mut tags, BehaviorTag::Upgradeable);
            summary.push_str(" Logic can be upgraded by an admin.");
        } else if tags.contains(&BehaviorTag::AssetWrapping) {
            push_tag(&mut tags, BehaviorTag::NonUpgradeable);
        }

        if tags.is_empty() {
            summary = "Contract with opaque logic.".to_string();
        }

        Intent {
            summary,
            behavior_tags: tags,
        }
    }
}

fn push_tag(tags: &mut Vec<BehaviorTag>, tag: BehaviorTag) {
    if !tags.contains(&tag) {
        tags.push(tag);
    }
}
