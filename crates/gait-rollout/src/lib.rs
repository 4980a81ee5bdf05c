//! Rollout production for gait analysis.
//!
//! Runs a policy against an environment in closed loop and materializes the
//! per-step contact flags as a [`gait_model::ContactSeries`]. Two equivalent
//! rollout realizations are provided (an explicit step loop and a fused
//! scan); the analysis side accepts either.

pub mod checkpoint;
pub mod env;
pub mod policy;
pub mod precision;
pub mod rollout;

pub use checkpoint::{CheckpointError, CheckpointStore, PolicyParams};
pub use env::{Environment, OscillatorConfig, OscillatorQuadruped, StepOutcome};
pub use policy::{LinearPolicy, Policy, ZeroPolicy};
pub use precision::Precision;
pub use rollout::{RolloutConfig, run_rollout, run_rollout_scan};
