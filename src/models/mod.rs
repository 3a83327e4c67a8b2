//! Report data model: the public output contract of the engine.
//!
//! Field names and enum value strings here are part of the public contract;
//! they serialize exactly as the interchange schema in `report_schema.json`
//! expects them.

pub mod actor;
pub mod controls;
pub mod flow;
pub mod intent;
pub mod report;
pub mod risk;
pub mod schema;

pub use self::actor::{Actor, ActorType, ACTOR_ADMIN, ACTOR_CONTRACT, ACTOR_USER_ANY};
pub use self::controls::{AdminPattern, AdminPower, Capability, Controls, Permission, Upgradeability, UpgradePattern};
pub use self::flow::{FlowFrequency, FlowTrigger, ValueFlow};
pub use self::intent::{BehaviorTag, Intent};
pub use self::report::{Confidence, ContractType, Meta, Report};
pub use self::risk::{Beneficiary, BenefitType, Risk, RiskCategory, RiskSeverity, TimeHorizon};
