//! gait — locomotion gait analysis for a simulated quadruped.
//!
//! This is the umbrella crate: it re-exports the data model, the
//! phase-extraction and cost-scoring core, and the rollout shims, and
//! provides a one-call [`analyze`] over a recorded contact series.

pub use gait_analysis::{
    GaitError, PhaseExtraction, Result, duty_factors, extract_phases, score,
};
pub use gait_model::{
    AnalysisConfig, ConfigError, ContactFrame, ContactSeries, Limb, SteadyStateWindow,
};
pub use gait_rollout::{
    CheckpointError, CheckpointStore, Environment, LinearPolicy, OscillatorConfig,
    OscillatorQuadruped, Policy, PolicyParams, Precision, RolloutConfig, StepOutcome, ZeroPolicy,
    run_rollout, run_rollout_scan,
};

/// Full analysis of one contact series.
#[derive(Debug, Clone, PartialEq)]
pub struct GaitReport {
    /// Mean phase per limb, in contact-vector order; 0 for the reference.
    pub phases: Vec<(Limb, f64)>,
    /// Stance duty factor per limb, in contact-vector order.
    pub duty_factors: Vec<(Limb, f64)>,
    /// Rank-based cost of the non-reference phases against the targets.
    pub cost: f64,
}

/// Extract phases, duty factors, and the gait cost in one call.
pub fn analyze(series: &ContactSeries, config: &AnalysisConfig) -> Result<GaitReport> {
    config.validate()?;
    let extraction = extract_phases(
        series,
        config.reference,
        &config.other_limbs(),
        config.window_ratio,
    )?;
    let cost = score(&extraction.other_means(), &config.targets)?;
    Ok(GaitReport {
        phases: extraction.mean_phases(),
        duty_factors: duty_factors(series, config.window_ratio)?,
        cost,
    })
}
