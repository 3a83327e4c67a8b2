pub mod engine;

pub use engine::{AnalysisInput, ExplanationEngine};
