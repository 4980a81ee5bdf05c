//! Rank-based gait cost.

use crate::error::Result;
use gait_model::ConfigError;

/// Score mean phases against rank-ordered targets.
///
/// Sorts the observed phases ascending, subtracts the targets elementwise,
/// and sums the squared residuals. Matching is by rank, not limb identity:
/// the scorer assumes the sorted phases land in the same order as the
/// targets' intended limb assignment. When they do not, phases are silently
/// misattributed; this is a known simplification of the objective, not an
/// assignment solver, and downstream optimization depends on it staying
/// that way.
///
/// Returns a non-negative scalar, zero iff the sorted phases equal the
/// targets exactly.
pub fn score(mean_phases: &[f64], targets: &[f64]) -> Result<f64> {
    if mean_phases.len() != targets.len() {
        return Err(ConfigError::TargetCount {
            expected: targets.len(),
            actual: mean_phases.len(),
        }
        .into());
    }
    let mut sorted = mean_phases.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted
        .iter()
        .zip(targets)
        .map(|(phase, target)| (phase - target) * (phase - target))
        .sum())
}
