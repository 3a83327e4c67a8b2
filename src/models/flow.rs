use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlowTrigger {
    UserAction,
    AdminAction,
    Automatic,
    External,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlowFrequency {
    OnDemand,
    PerBlock,
    EventDriven,
    Immediate,
}

/// A directed, conditional movement of value or capability between actors.
///
/// Paired movements (deposit-and-mint, withdraw-and-release) are two flow
/// records, never one bidirectional edge. Flow ids are fixed constants per
/// capability so repeated runs on the same contract diff cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueFlow {
    pub id: String,
    pub source_actor_id: String,
    pub target_actor_id: String,
    pub asset: String,
    pub trigger: FlowTrigger,
    /// Plain constraints, not code.
    pub conditions: String,
    pub frequency: FlowFrequency,
}
