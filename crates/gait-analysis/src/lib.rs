//! Gait phase extraction and cost scoring.
//!
//! Consumes a [`gait_model::ContactSeries`], infers inter-leg phase offsets
//! from ground-contact onsets, and scores them against target phases.

mod cost;
mod duty;
mod error;
mod phase;

pub use cost::score;
pub use duty::duty_factors;
pub use error::{GaitError, Result};
pub use phase::{PhaseExtraction, extract_phases};
