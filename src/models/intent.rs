use serde::{Deserialize, Serialize};

/// Closed vocabulary of contract behavior tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BehaviorTag {
    Custody,
    AssetWrapping,
    FeeExtraction,
    Upgradeable,
    NonUpgradeable,
    GovernanceControlled,
    MintBurn,
    Proxy,
    ExternalDependency,
}

/// What the contract is for, in one deterministic sentence plus tags.
///
/// Tags keep evaluation order and never repeat; the base category chosen by
/// the classification ladder always comes first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub summary: String,
    pub behavior_tags: Vec<BehaviorTag>,
}

impl Intent {
    pub fn has_tag(&self, tag: BehaviorTag) -> bool {
        self.behavior_tags.contains(&tag)
    }
}
