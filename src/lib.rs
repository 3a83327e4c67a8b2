//! Explains what an EVM contract does from its deployed bytecode.
//!
//! The engine reads raw bytecode and the 4-byte selectors it exposes, then
//! produces a schema-validated report: intent summary, actor set, control and
//! permission map, value-flow graph, and risk annotations. Classification is
//! static signature matching only; there is no disassembly, storage decoding
//! or simulation.

pub mod analyzers;
pub mod blockchain;
pub mod core;
pub mod heuristics;
pub mod models;
pub mod risk;
pub mod signatures;
pub mod utils;

pub use self::core::{AnalysisInput, ExplanationEngine};
pub use self::models::Report;
pub use self::risk::RiskSource;
pub use self::signatures::SignatureRegistry;
pub use self::utils::{ExplainerError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
