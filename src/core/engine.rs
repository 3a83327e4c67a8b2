//! Report aggregation: runs every detector, merges their outputs into one
//! report, derives the admin-power rating, and validates the result against
//! the output schema before returning it.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use ethers::utils::keccak256;
use tracing::{debug, info};

use crate::analyzers::{
    BehaviorAnalysis, BehaviorClassifier, ControlMap, FlowEngine, IntentClassifier,
};
use crate::heuristics::{extract_selectors, normalize_bytecode, SelectorSet};
use crate::models::{
    schema, Actor, ActorType, AdminPower, BehaviorTag, Capability, Confidence, ContractType,
    Controls, Intent, Meta, Report, Risk, RiskCategory, RiskSeverity, UpgradePattern, ValueFlow,
    ACTOR_ADMIN, ACTOR_CONTRACT, ACTOR_USER_ANY,
};
use crate::risk::{IncidentRegistry, RiskSource};
use crate::signatures::SignatureRegistry;
use crate::utils::{ExplainerError, Result};

/// Everything one analysis consumes. Chain retrieval happens elsewhere; the
/// engine is a pure function of this input.
#[derive(Debug, Clone)]
pub struct AnalysisInput {
    pub address: String,
    pub chain: String,
    /// Raw bytecode hex, `0x` prefix optional, possibly empty.
    pub bytecode: String,
    /// Normalized 4-byte selectors; derived from bytecode when not supplied.
    pub selectors: Vec<String>,
}

impl AnalysisInput {
    /// Build an input, deriving the selector set from the bytecode.
    pub fn from_bytecode(
        address: impl Into<String>,
        chain: impl Into<String>,
        bytecode: impl Into<String>,
    ) -> Self {
        let bytecode = bytecode.into();
        let selectors = extract_selectors(&bytecode);
        Self {
            address: address.into(),
            chain: chain.into(),
            bytecode,
            selectors,
        }
    }
}

pub struct ExplanationEngine {
    intent: IntentClassifier,
    control_map: ControlMap,
    behavior: BehaviorClassifier,
    flow_engine: FlowEngine,
    risk_source: Box<dyn RiskSource>,
}

impl ExplanationEngine {
    /// Engine with the standard signature set and the built-in incident table.
    pub fn new() -> Self {
        Self::with_config(
            Arc::new(SignatureRegistry::standard()),
            Box::new(IncidentRegistry::new()),
        )
    }

    pub fn with_config(signatures: Arc<SignatureRegistry>, risk_source: Box<dyn RiskSource>) -> Self {
        Self {
            intent: IntentClassifier::new(Arc::clone(&signatures)),
            control_map: ControlMap::new(Arc::clone(&signatures)),
            behavior: BehaviorClassifier::new(Arc::clone(&signatures)),
            flow_engine: FlowEngine::new(signatures),
            risk_source,
        }
    }

    /// Run the full analysis and return a schema-validated report.
    pub fn explain(&self, input: &AnalysisInput) -> Result<Report> {
        info!(address = %input.address, chain = %input.chain, "analyzing contract");

        let selectors = SelectorSet::new(&input.selectors);
        debug!(count = selectors.len(), "selector set ready");

        let intent = self.intent.classify(&input.bytecode, &selectors);
        let mut controls = self.control_map.detect(&input.bytecode, &selectors);
        let behavior = self.behavior.analyze(&input.bytecode, &selectors);
        let flows = self.flow_engine.analyze(&input.bytecode, &selectors);

        let mut risks = Vec::new();
        let historical_risk = self.risk_source.lookup(&input.address);
        let has_incident = historical_risk.is_some();
        risks.extend(historical_risk);
        risks.extend(incentive_risks(&behavior));

        controls.admin_power = admin_power(&controls, &intent);
        let actors = build_actors(&input.address, &intent, &controls, &flows, &risks);

        let report = Report {
            meta: Meta {
                address: input.address.clone(),
                chain: input.chain.clone(),
                contract_type: ContractType::Unknown,
                verified_source: false,
                bytecode_hash: bytecode_hash(&input.bytecode),
                analysis_timestamp: unix_now(),
            },
            intent,
            actors,
            controls,
            value_flows: flows,
            risks,
            beneficiaries: behavior.beneficiaries,
            confidence: Confidence {
                // Crude proxy, not a calibrated probability: known incidents
                // collapse it, everything else sits at a fixed default.
                score: if has_incident { 0.1 } else { 0.5 },
                limitations: vec![
                    "Static analysis only".to_string(),
                    "No storage inspection".to_string(),
                ],
            },
        };

        check_referential_integrity(&report)?;
        schema::validate_report(&report)?;
        Ok(report)
    }
}

impl Default for ExplanationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// One canonical admin-power algorithm, driven only by the assembled
/// controls and intent. No address or token-name special cases.
fn admin_power(controls: &Controls, intent: &Intent) -> AdminPower {
    let has_capability = |capability: Capability| {
        controls.permissions.iter().any(|p| p.capability == capability)
    };

    let can_upgrade = controls.upgradeability.pattern != UpgradePattern::None
        || has_capability(Capability::Upgrade);
    let centralized = intent.summary.contains("Centralized");

    if can_upgrade || has_capability(Capability::Blacklist) || centralized {
        AdminPower::High
    } else if has_capability(Capability::Pause) || intent.has_tag(BehaviorTag::GovernanceControlled)
    {
        AdminPower::Medium
    } else {
        AdminPower::Zero
    }
}

/// Canonical actor construction. The contract itself always exists; the
/// generic user and admin actors are added when the other sections imply or
/// reference them, which keeps every actorId reference resolvable.
fn build_actors(
    address: &str,
    intent: &Intent,
    controls: &Controls,
    flows: &[ValueFlow],
    risks: &[Risk],
) -> Vec<Actor> {
    let mut referenced: HashSet<&str> = HashSet::new();
    for permission in &controls.permissions {
        referenced.insert(permission.actor_id.as_str());
    }
    if let Some(authority) = &controls.upgradeability.upgrade_authority {
        referenced.insert(authority.as_str());
    }
    for flow in flows {
        referenced.insert(flow.source_actor_id.as_str());
        referenced.insert(flow.target_actor_id.as_str());
    }
    for risk in risks {
        for actor in &risk.affected_actors {
            referenced.insert(actor.as_str());
        }
    }

    let mut actors = vec![Actor {
        id: ACTOR_CONTRACT.to_string(),
        kind: ActorType::Contract,
        address: address.to_string(),
        description: "The automated logic and custody enforcement".to_string(),
    }];

    let public_flows =
        intent.has_tag(BehaviorTag::Custody) || intent.has_tag(BehaviorTag::AssetWrapping);
    if public_flows || referenced.contains(ACTOR_USER_ANY) {
        actors.push(Actor {
            id: ACTOR_USER_ANY.to_string(),
            kind: ActorType::User,
            address: "Any Public Address".to_string(),
            description: "Holders who can transfer or interact with the asset".to_string(),
        });
    }

    let has_admin_power = controls.upgradeability.pattern != UpgradePattern::None
        || !controls.permissions.is_empty();
    if has_admin_power || intent.summary.contains("Centralized") || referenced.contains(ACTOR_ADMIN)
    {
        actors.push(Actor {
            id: ACTOR_ADMIN.to_string(),
            kind: ActorType::Admin,
            address: "Owner / MultiSig".to_string(),
            description: "Can pause transfers, blacklist, or upgrade logic".to_string(),
        });
    }

    actors
}

/// Non-standard incentive mechanics become explicit risk records.
fn incentive_risks(behavior: &BehaviorAnalysis) -> Vec<Risk> {
    behavior
        .risk_flags
        .iter()
        .map(|flag| Risk {
            id: format!("incentive_{}", flag.replace('-', "_")),
            category: RiskCategory::IncentiveMisalignment,
            description: format!("Token uses a non-standard incentive mechanism: {flag}"),
            affected_actors: vec![ACTOR_USER_ANY.to_string()],
            severity: RiskSeverity::Medium,
            trigger_condition: "Token transfer or balance accounting".to_string(),
        })
        .collect()
}

/// Every actorId referenced by permissions, flows, or risks must resolve in
/// the actor set. A violation is an aggregator bug, so the whole analysis
/// fails rather than returning an inconsistent report.
fn check_referential_integrity(report: &Report) -> Result<()> {
    let ids: HashSet<&str> = report.actors.iter().map(|a| a.id.as_str()).collect();

    let check = |id: &str, location: &str| -> Result<()> {
        if ids.contains(id) {
            Ok(())
        } else {
            Err(ExplainerError::InvariantViolation(format!(
                "actor id `{id}` referenced by {location} has no entry in the actor set"
            )))
        }
    };

    for permission in &report.controls.permissions {
        check(&permission.actor_id, "a permission")?;
    }
    if let Some(authority) = &report.controls.upgradeability.upgrade_authority {
        check(authority, "the upgrade authority")?;
    }
    for flow in &report.value_flows {
        check(&flow.source_actor_id, "a value flow")?;
        check(&flow.target_actor_id, "a value flow")?;
    }
    for risk in &report.risks {
        for actor in &risk.affected_actors {
            check(actor, "a risk")?;
        }
    }
    for beneficiary in &report.beneficiaries {
        check(&beneficiary.actor_id, "a beneficiary")?;
    }
    Ok(())
}

fn bytecode_hash(bytecode: &str) -> Option<String> {
    let code = normalize_bytecode(bytecode);
    if code.is_empty() {
        return None;
    }
    hex::decode(&code)
        .ok()
        .map(|bytes| format!("0x{}", hex::encode(keccak256(bytes))))
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytecode_hash_is_stable_and_prefixed() {
        let a = bytecode_hash("0x60016002").expect("valid hex should hash");
        let b = bytecode_hash("60016002").expect("prefix must not matter");
        assert_eq!(a, b);
        assert!(a.starts_with("0x"));
        assert_eq!(a.len(), 66);
    }

    #[test]
    fn malformed_or_empty_bytecode_has_no_hash() {
        assert_eq!(bytecode_hash(""), None);
        assert_eq!(bytecode_hash("0x"), None);
        assert_eq!(bytecode_hash("0xabc"), None); // odd length
        assert_eq!(bytecode_hash("zz"), None);
    }

    #[test]
    fn input_from_bytecode_extracts_selectors() {
        let input = AnalysisInput::from_bytecode("0x01", "ethereum", "63a9059cbb");
        assert_eq!(input.selectors, vec!["0xa9059cbb"]);
    }
}
