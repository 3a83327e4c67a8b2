//! Historical-incident risk lookup.

pub mod incidents;

pub use incidents::IncidentRegistry;

use crate::models::Risk;

/// External collaborator seam: maps a contract address to a known risk.
///
/// Absence means "no known risk", never an error. Retry and timeout policy
/// belongs to the implementation, not the classification core.
pub trait RiskSource: Send + Sync {
    fn lookup(&self, address: &str) -> Option<Risk>;
}
