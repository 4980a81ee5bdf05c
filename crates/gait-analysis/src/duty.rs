//! Stance duty factors over the steady-state window.

use crate::error::{GaitError, Result};
use gait_model::{ContactSeries, Limb, SteadyStateWindow};

/// Fraction of steady-state steps each limb spends in stance.
///
/// A healthy walk sits near 0.6–0.8 per limb; values near 0 or 1 indicate a
/// limb that is airborne or dragging and usually accompany phase-extraction
/// failures. Returned in contact-vector order.
pub fn duty_factors(series: &ContactSeries, window_ratio: f64) -> Result<Vec<(Limb, f64)>> {
    let window = SteadyStateWindow::from_ratio(window_ratio, series.len())
        .map_err(GaitError::Configuration)?;
    let frames = series.window_frames(window);

    Ok(Limb::ALL
        .iter()
        .map(|&limb| {
            let stance = frames.iter().filter(|frame| frame.in_contact(limb)).count();
            (limb, stance as f64 / frames.len() as f64)
        })
        .collect())
}
