use serde::{Deserialize, Serialize};

/// Canonical actor ids the aggregator constructs.
pub const ACTOR_CONTRACT: &str = "contract";
pub const ACTOR_USER_ANY: &str = "user_any";
pub const ACTOR_ADMIN: &str = "admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActorType {
    User,
    Admin,
    Multisig,
    Dao,
    Contract,
    ExternalContract,
    Oracle,
}

/// An address-bearing party in the contract's behavior model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Unique within a report.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActorType,
    pub address: String,
    pub description: String,
}
