//! Behavior detectors.
//!
//! Each detector is a pure, synchronous function of `(bytecode, selectors)`:
//! no shared state, no IO, safe to run concurrently across analyses.
//! Identical input always produces identical output.

pub mod actor_detector;
pub mod behavior;
pub mod control_map;
pub mod flow_engine;
pub mod intent;

pub use actor_detector::ActorDetector;
pub use behavior::{BehaviorAnalysis, BehaviorClassifier, IncentiveModel};
pub use control_map::ControlMap;
pub use flow_engine::FlowEngine;
pub use intent::IntentClassifier;
