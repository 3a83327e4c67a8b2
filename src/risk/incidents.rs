//! Known-exploit address registry.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::RiskSource;
use crate::models::{Risk, RiskCategory, RiskSeverity, ACTOR_USER_ANY};

/// Addresses linked to documented exploits, keyed lower-case.
static KNOWN_INCIDENTS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "0xb5d85cbf7cb3ee0d56b3bb207d5fc4b82f43f511",
            "Euler Finance (Flash Loan Exploit)",
        ),
        (
            "0x2b6ed29a95753c3ad948348e3e7b1a251080ffb9",
            "Nomad Bridge (Root Exploit)",
        ),
        (
            "0x8894e0a0c962cb723c1976a4421c95949be2d4e3",
            "Ronin Bridge (Key Compromise)",
        ),
    ])
});

/// Risk source backed by the static incident table.
pub struct IncidentRegistry;

impl IncidentRegistry {
    pub fn new() -> Self {
        Self
    }
}

impl Default for IncidentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RiskSource for IncidentRegistry {
    fn lookup(&self, address: &str) -> Option<Risk> {
        let key = address.trim().to_ascii_lowercase();
        KNOWN_INCIDENTS.get(key.as_str()).map(|incident| Risk {
            id: "legacy_exploit".to_string(),
            category: RiskCategory::Dependency,
            description: format!("This contract is linked to a known exploit: {incident}"),
            affected_actors: vec![ACTOR_USER_ANY.to_string()],
            severity: RiskSeverity::High,
            trigger_condition: "Historical Event".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_exploit_address_matches() {
        let risk = IncidentRegistry::new()
            .lookup("0xb5d85cbf7cb3ee0d56b3bb207d5fc4b82f43f511")
            .expect("euler address should be listed");
        assert_eq!(risk.severity, RiskSeverity::High);
        assert!(risk.description.contains("Euler Finance"));
        assert_eq!(risk.affected_actors, vec![ACTOR_USER_ANY]);
    }

    #[test]
    fn lookup_is_checksum_agnostic() {
        assert!(IncidentRegistry::new()
            .lookup("0xB5D85CBf7cB3EE0D56b3bB207D5Fc4B82f43F511")
            .is_some());
    }

    #[test]
    fn unknown_address_has_no_risk() {
        assert!(IncidentRegistry::new()
            .lookup("0x0000000000000000000000000000000000000001")
            .is_none());
    }
}
