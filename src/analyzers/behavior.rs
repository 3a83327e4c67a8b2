//! Incentive-model classification.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::heuristics::SelectorSet;
use crate::models::Beneficiary;
use crate::signatures::SignatureRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncentiveModel {
    Standard,
    Rebasing,
    FeeOnTransfer,
    Reflection,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BehaviorAnalysis {
    pub incentive_model: IncentiveModel,
    pub risk_flags: Vec<String>,
    pub beneficiaries: Vec<Beneficiary>,
}

/// Detects non-standard token economics.
///
/// Checks run in a fixed order and each match appends its risk flag; the
/// incentive model itself is single-valued, so when several signatures
/// coexist the last matching check wins.
pub struct BehaviorClassifier {
    signatures: Arc<SignatureRegistry>,
}

impl BehaviorClassifier {
    pub fn new(signatures: Arc<SignatureRegistry>) -> Self {
        Self { signatures }
    }

    pub fn analyze(&self, _bytecode: &str, selectors: &SelectorSet) -> BehaviorAnalysis {
        let sigs = &self.signatures;

        let mut incentive_model = IncentiveModel::Standard;
        let mut risk_flags = Vec::new();

        // 1. Rebasing share accounting (stETH/aToken style)
        if selectors.contains(&sigs.incentive.shares_of)
            || selectors.contains(&sigs.incentive.get_rate)
        {
            incentive_model = IncentiveModel::Rebasing;
            risk_flags.push("rebasing-token".to_string());
        }

        // 2. Fee-on-transfer
        if selectors.contains(&sigs.incentive.get_fee)
            || selectors.contains(&sigs.incentive.tax_rate)
        {
            incentive_model = IncentiveModel::FeeOnTransfer;
            risk_flags.push("fee-on-transfer".to_string());
        }

        // 3. Reflection-style redistribution
        if selectors.contains(&sigs.incentive.reflect) {
            incentive_model = IncentiveModel::Reflection;
            risk_flags.push("reflection-token".to_string());
        }

        BehaviorAnalysis {
            incentive_model,
            risk_flags,
            beneficiaries: Vec::new(),
        }
    }
}
