//! Per-address actor resolution.
//!
//! A reusable primitive for turning resolved addresses into actors. The
//! aggregation path currently builds its three canonical actors directly;
//! this detector exists for a future multi-actor resolution pass over
//! privileged-getter results.

use std::collections::{HashMap, HashSet};

use crate::models::{Actor, ActorType};

const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

pub struct ActorDetector;

impl ActorDetector {
    pub fn new() -> Self {
        Self
    }

    /// Resolve one address into an actor.
    ///
    /// The zero address is the burn destination; an address present in the
    /// role map is biased towards admin because it came from a privileged
    /// getter; anything else is an anonymous user.
    pub fn detect(&self, address: &str, known_roles: &HashMap<String, String>) -> Actor {
        if address == ZERO_ADDRESS {
            return Actor {
                id: "burn_address".to_string(),
                kind: ActorType::User,
                address: address.to_string(),
                description: "The zero address (burn destination)".to_string(),
            };
        }

        if let Some(role) = known_roles.get(address) {
            return Actor {
                id: format!("{role}_{}", short(address)),
                kind: ActorType::Admin,
                address: address.to_string(),
                description: format!("Detected {role}"),
            };
        }

        Actor {
            id: format!("user_{}", short(address)),
            kind: ActorType::User,
            address: address.to_string(),
            description: "Unknown actor".to_string(),
        }
    }

    /// Drop actors with a repeated address, keeping the first occurrence.
    /// Stable, not set-based, so ordering stays deterministic.
    pub fn deduplicate(&self, actors: Vec<Actor>) -> Vec<Actor> {
        let mut seen = HashSet::new();
        actors
            .into_iter()
            .filter(|a| seen.insert(a.address.clone()))
            .collect()
    }
}

impl Default for ActorDetector {
    fn default() -> Self {
        Self::new()
    }
}

fn short(address: &str) -> &str {
    address.get(..6).unwrap_or(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_address_is_burn_destination() {
        let actor = ActorDetector::new().detect(ZERO_ADDRESS, &HashMap::new());
        assert_eq!(actor.id, "burn_address");
        assert_eq!(actor.kind, ActorType::User);
    }

    #[test]
    fn role_map_biases_towards_admin() {
        let mut roles = HashMap::new();
        roles.insert("0xabcdef0123".to_string(), "owner".to_string());
        let actor = ActorDetector::new().detect("0xabcdef0123", &roles);
        assert_eq!(actor.id, "owner_0xabcd");
        assert_eq!(actor.kind, ActorType::Admin);
        assert_eq!(actor.description, "Detected owner");
    }

    #[test]
    fn unknown_address_defaults_to_user() {
        let actor = ActorDetector::new().detect("0x1234567890", &HashMap::new());
        assert_eq!(actor.id, "user_0x1234");
        assert_eq!(actor.kind, ActorType::User);
    }

    #[test]
    fn deduplication_keeps_first_occurrence() {
        let detector = ActorDetector::new();
        let roles = HashMap::new();
        let first = detector.detect("0xaaaaaaaaaa", &roles);
        let mut second = detector.detect("0xaaaaaaaaaa", &roles);
        second.description = "later duplicate".to_string();
        let third = detector.detect("0xbbbbbbbbbb", &roles);

        let deduped = detector.deduplicate(vec![first.clone(), second, third.clone()]);
        assert_eq!(deduped, vec![first, third]);
    }
}
