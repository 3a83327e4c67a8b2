use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::controls::Controls;
use super::flow::ValueFlow;
use super::intent::Intent;
use super::risk::{Beneficiary, Risk};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContractType {
    Token,
    Vault,
    Governance,
    Proxy,
    Router,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub address: String,
    pub chain: String,
    pub contract_type: ContractType,
    pub verified_source: bool,
    /// keccak256 of the decoded bytecode; omitted when the hex is malformed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytecode_hash: Option<String>,
    pub analysis_timestamp: u64,
}

/// Heuristic confidence, not a calibrated probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Confidence {
    pub score: f64,
    pub limitations: Vec<String>,
}

/// The full explanation of one contract. Assembled once per analysis,
/// validated against the output schema, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub meta: Meta,
    pub intent: Intent,
    pub actors: Vec<Actor>,
    pub controls: Controls,
    pub value_flows: Vec<ValueFlow>,
    pub risks: Vec<Risk>,
    pub beneficiaries: Vec<Beneficiary>,
    pub confidence: Confidence,
}
