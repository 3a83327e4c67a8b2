//! Value-flow mapping from recognized capabilities.

use std::sync::Arc;

use crate::heuristics::SelectorSet;
use crate::models::{FlowFrequency, FlowTrigger, ValueFlow, ACTOR_CONTRACT, ACTOR_USER_ANY};
use crate::signatures::SignatureRegistry;

pub const DEPOSIT_FLOW: &str = "deposit_flow";
pub const DEPOSIT_MINT_FLOW: &str = "deposit_mint_flow";
pub const WITHDRAW_FLOW: &str = "withdraw_flow";
pub const WITHDRAW_RELEASE_FLOW: &str = "withdraw_release_flow";
pub const ADMIN_MINT_FLOW: &str = "admin_mint";
pub const USER_TRANSFER_FLOW: &str = "user_transfer";
pub const ADMIN_SEIZE_FLOW: &str = "admin_seize";

/// Maps capabilities to directed value flows.
///
/// Each recognized capability contributes a fixed single flow or pair;
/// deposits and withdrawals always carry their reciprocal record. Pausing is
/// a control state, not a value movement, and contributes nothing here.
pub struct FlowEngine {
    signatures: Arc<SignatureRegistry>,
}

impl FlowEngine {
    pub fn new(signatures: Arc<SignatureRegistry>) -> Self {
        Self { signatures }
    }

    pub fn analyze(&self, _bytecode: &str, selectors: &SelectorSet) -> Vec<ValueFlow> {
        let sigs = &self.signatures;
        let mut flows = Vec::new();

        // 1. User deposits, with the reciprocal 1:1 mint
        if selectors.contains(&sigs.wrapper.deposit) {
            flows.push(ValueFlow {
                id: DEPOSIT_FLOW.to_string(),
                source_actor_id: ACTOR_USER_ANY.to_string(),
                target_actor_id: ACTOR_CONTRACT.to_string(),
                asset: "ETH".to_string(),
                trigger: FlowTrigger::UserAction,
                conditions: "payable deposit()".to_string(),
                frequency: FlowFrequency::OnDemand,
            });
            flows.push(ValueFlow {
                id: DEPOSIT_MINT_FLOW.to_string(),
                source_actor_id: ACTOR_CONTRACT.to_string(),
                target_actor_id: ACTOR_USER_ANY.to_string(),
                asset: "WETH (ERC20)".to_string(),
                trigger: FlowTrigger::Automatic,
                conditions: "exact 1:1 mint on ETH received".to_string(),
                frequency: FlowFrequency::Immediate,
            });
        }

        // 2. Withdrawals, with the reciprocal burn/release
        if selectors.contains(&sigs.wrapper.withdraw) {
            flows.push(ValueFlow {
                id: WITHDRAW_FLOW.to_string(),
                source_actor_id: ACTOR_USER_ANY.to_string(),
                target_actor_id: ACTOR_CONTRACT.to_string(),
                asset: "WETH".to_string(),
                trigger: FlowTrigger::UserAction,
                conditions: "withdraw(amount)".to_string(),
                frequency: FlowFrequency::OnDemand,
            });
            flows.push(ValueFlow {
                id: WITHDRAW_RELEASE_FLOW.to_string(),
                source_actor_id: ACTOR_CONTRACT.to_string(),
                target_actor_id: ACTOR_USER_ANY.to_string(),
                asset: "ETH".to_string(),
                trigger: FlowTrigger::Automatic,
                conditions: "exact 1:1 burn of WETH".to_string(),
                frequency: FlowFrequency::Immediate,
            });
        }

        // 3. Admin minting (inflation risk)
        if selectors.contains(&sigs.token.mint) {
            flows.push(ValueFlow {
                id: ADMIN_MINT_FLOW.to_string(),
                source_actor_id: ACTOR_CONTRACT.to_string(),
                target_actor_id: ACTOR_USER_ANY.to_string(),
                asset: "ERC20".to_string(),
                trigger: FlowTrigger::AdminAction,
                conditions: "Caller must be minter".to_string(),
                frequency: FlowFrequency::OnDemand,
            });
        }

        // 4. Peer transfers
        if selectors.contains(&sigs.token.transfer_from) {
            flows.push(ValueFlow {
                id: USER_TRANSFER_FLOW.to_string(),
                source_actor_id: ACTOR_USER_ANY.to_string(),
                target_actor_id: ACTOR_USER_ANY.to_string(),
                asset: "ERC20".to_string(),
                trigger: FlowTrigger::UserAction,
                conditions: "transfer(to, amount)".to_string(),
                frequency: FlowFrequency::OnDemand,
            });
        }

        // 5. Admin confiscation
        if selectors.contains_any(&sigs.admin.blacklist_variants) {
            flows.push(ValueFlow {
                id: ADMIN_SEIZE_FLOW.to_string(),
                source_actor_id: ACTOR_CONTRACT.to_string(),
                target_actor_id: ACTOR_USER_ANY.to_string(),
                asset: "Freeze/Seize".to_string(),
                trigger: FlowTrigger::AdminAction,
                conditions: "admin calls blacklist()".to_string(),
                frequency: FlowFrequency::EventDriven,
            });
        }

        flows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> FlowEngine {
        FlowEngine::new(Arc::new(SignatureRegistry::standard()))
    }

    fn selectors(list: &[&str]) -> SelectorSet {
        SelectorSet::new(list.iter().copied())
    }

    fn ids(flows: &[ValueFlow]) -> Vec<&str> {
        flows.iter().map(|f| f.id.as_str()).collect()
    }

    #[test]
    fn deposit_always_pairs_with_mint() {
        let flows = engine().analyze("", &selectors(&["0xd0e30db0"]));
        assert_eq!(ids(&flows), vec![DEPOSIT_FLOW, DEPOSIT_MINT_FLOW]);
        assert_eq!(flows[0].source_actor_id, ACTOR_USER_ANY);
        assert_eq!(flows[0].target_actor_id, ACTOR_CONTRACT);
        assert_eq!(flows[1].source_actor_id, ACTOR_CONTRACT);
        assert_eq!(flows[1].target_actor_id, ACTOR_USER_ANY);
        assert_eq!(flows[1].trigger, FlowTrigger::Automatic);
    }

    #[test]
    fn withdraw_always_pairs_with_release() {
        let flows = engine().analyze("", &selectors(&["0x2e1a7d4d"]));
        assert_eq!(ids(&flows), vec![WITHDRAW_FLOW, WITHDRAW_RELEASE_FLOW]);
    }

    #[test]
    fn wrapper_selectors_produce_four_flows() {
        let flows = engine().analyze("", &selectors(&["0xd0e30db0", "0x2e1a7d4d"]));
        assert_eq!(flows.len(), 4);
    }

    #[test]
    fn mint_is_a_single_admin_flow() {
        let flows = engine().analyze("", &selectors(&["0x40c10f19"]));
        assert_eq!(ids(&flows), vec![ADMIN_MINT_FLOW]);
        assert_eq!(flows[0].trigger, FlowTrigger::AdminAction);
    }

    #[test]
    fn blacklist_produces_seize_flow() {
        let flows = engine().analyze("", &selectors(&["0x347c4846"]));
        assert_eq!(ids(&flows), vec![ADMIN_SEIZE_FLOW]);
        assert_eq!(flows[0].frequency, FlowFrequency::EventDriven);
    }

    #[test]
    fn pause_produces_no_flow() {
        let flows = engine().analyze("", &selectors(&["0x8456cb59", "0x3f4ba83a"]));
        assert!(flows.is_empty());
    }

    #[test]
    fn flow_ids_are_stable_across_runs() {
        let e = engine();
        let set = selectors(&["0xd0e30db0", "0x2e1a7d4d", "0x23b872dd"]);
        assert_eq!(e.analyze("", &set), e.analyze("", &set));
    }
}
