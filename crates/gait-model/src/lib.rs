//! Contact data model for quadruped gait analysis.
//!
//! `ContactSeries` is the record of one rollout (per-step contact flags per
//! limb). `AnalysisConfig` is the static description of how to analyze it
//! (steady-state window, reference limb, phase targets).

pub mod config;
pub mod contact;
pub mod limb;
pub mod window;

pub use config::{AnalysisConfig, ConfigError};
pub use contact::{ContactFrame, ContactSeries};
pub use limb::Limb;
pub use window::SteadyStateWindow;
