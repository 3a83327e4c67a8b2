//! The output schema gate.
//!
//! Every assembled report is checked against the embedded JSON Schema before
//! it leaves the engine. A violation here is an internal detector/aggregator
//! mismatch, never a legitimate "unknown contract" outcome.

use jsonschema::Validator;
use once_cell::sync::Lazy;
use serde_json::Value;

use super::report::Report;
use crate::utils::{ExplainerError, Result};

const REPORT_SCHEMA: &str = include_str!("report_schema.json");

static REPORT_VALIDATOR: Lazy<std::result::Result<Validator, String>> = Lazy::new(|| {
    serde_json::from_str::<Value>(REPORT_SCHEMA)
        .map_err(|e| e.to_string())
        .and_then(|schema| jsonschema::validator_for(&schema).map_err(|e| e.to_string()))
});

/// Validate a report against the output schema.
pub fn validate_report(report: &Report) -> Result<()> {
    let value = serde_json::to_value(report)?;
    validate_value(&value)
}

/// Validate an already-serialized report.
pub fn validate_value(value: &Value) -> Result<()> {
    let validator = REPORT_VALIDATOR
        .as_ref()
        .map_err(|e| ExplainerError::SchemaViolation(format!("schema failed to compile: {e}")))?;
    validator
        .validate(value)
        .map_err(|e| ExplainerError::SchemaViolation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn embedded_schema_compiles() {
        assert!(REPORT_VALIDATOR.is_ok(), "{:?}", REPORT_VALIDATOR.as_ref().err());
    }

    #[test]
    fn rejects_unknown_fields() {
        let value = json!({ "unexpected": true });
        assert!(validate_value(&value).is_err());
    }

    #[test]
    fn rejects_bad_vocabulary() {
        let mut value = sample_report();
        value["controls"]["adminPower"] = json!("extreme");
        assert!(validate_value(&value).is_err());
    }

    #[test]
    fn accepts_minimal_valid_report() {
        assert!(validate_value(&sample_report()).is_ok());
    }

    fn sample_report() -> Value {
        json!({
            "meta": {
                "address": "0x0000000000000000000000000000000000000001",
                "chain": "ethereum",
                "contractType": "unknown",
                "verifiedSource": false,
                "analysisTimestamp": 1700000000
            },
            "intent": { "summary": "Contract with opaque logic.", "behaviorTags": [] },
            "actors": [{
                "id": "contract",
                "type": "contract",
                "address": "0x0000000000000000000000000000000000000001",
                "description": "The automated logic and custody enforcement"
            }],
            "controls": {
                "permissions": [],
                "upgradeability": {
                    "pattern": "none",
                    "upgradeAuthority": null,
                    "timelockSeconds": null,
                    "upgradeHistoryCount": 0,
                    "adminPattern": "none"
                },
                "adminPower": "zero"
            },
            "valueFlows": [],
            "risks": [],
            "beneficiaries": [],
            "confidence": { "score": 0.5, "limitations": ["Static analysis only"] }
        })
    }
}
