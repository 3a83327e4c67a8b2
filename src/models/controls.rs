use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    Pause,
    Upgrade,
    SetFees,
    Mint,
    Seize,
    Redirect,
    Blacklist,
    Delegatecall,
}

/// One capability held by an actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    pub actor_id: String,
    pub capability: Capability,
    pub scope: String,
    pub revocable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UpgradePattern {
    None,
    TransparentProxy,
    Uups,
    Beacon,
    Diamond,
    MinimalProxy,
}

/// Who holds administrative power, independent of what they can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdminPattern {
    Ownable,
    AccessControl,
    Multisig,
    Timelock,
    Custom,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Upgradeability {
    pub pattern: UpgradePattern,
    /// Actor id of who can upgrade; static analysis only resolves a
    /// placeholder, never the concrete address.
    pub upgrade_authority: Option<String>,
    /// Requires on-chain state inspection; left unknown.
    pub timelock_seconds: Option<u64>,
    /// Requires on-chain history; left at zero.
    pub upgrade_history_count: u32,
    pub admin_pattern: AdminPattern,
}

/// Coarse rating of unilateral administrative control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminPower {
    Zero,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Controls {
    pub permissions: Vec<Permission>,
    pub upgradeability: Upgradeability,
    /// Derived by the aggregator from permissions, upgradeability and intent.
    pub admin_power: AdminPower,
}
