//! Inter-leg phase offset extraction from contact onsets.

use crate::error::{GaitError, Result};
use gait_model::{ConfigError, ContactSeries, Limb, SteadyStateWindow};

/// Per-limb phase offsets extracted from one contact series.
///
/// Offsets are fractions of a stride cycle by which each limb's contact
/// onset lags the reference limb's onset. The reference limb's phase is 0
/// by definition.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseExtraction {
    reference: Limb,
    window: SteadyStateWindow,
    stride_lengths: Vec<usize>,
    offsets: Vec<(Limb, Vec<f64>)>,
}

impl PhaseExtraction {
    /// The reference limb whose onsets defined stride boundaries.
    pub fn reference(&self) -> Limb {
        self.reference
    }

    /// The steady-state window the extraction ran over.
    pub fn window(&self) -> SteadyStateWindow {
        self.window
    }

    /// Step counts of the reference limb's stride intervals.
    pub fn stride_lengths(&self) -> &[usize] {
        &self.stride_lengths
    }

    /// Per-stride phase offsets for one tracked limb.
    pub fn offsets(&self, limb: Limb) -> Option<&[f64]> {
        self.offsets
            .iter()
            .find(|(l, _)| *l == limb)
            .map(|(_, offsets)| offsets.as_slice())
    }

    /// Mean phase for one limb; 0 for the reference limb.
    pub fn mean_phase(&self, limb: Limb) -> Option<f64> {
        if limb == self.reference {
            return Some(0.0);
        }
        self.offsets(limb)
            .map(|offsets| offsets.iter().sum::<f64>() / offsets.len() as f64)
    }

    /// Mean phases for every analyzed limb, in contact-vector order.
    pub fn mean_phases(&self) -> Vec<(Limb, f64)> {
        Limb::ALL
            .iter()
            .filter_map(|&limb| self.mean_phase(limb).map(|phase| (limb, phase)))
            .collect()
    }

    /// Mean phases of the non-reference limbs, in the order they were given.
    pub fn other_means(&self) -> Vec<f64> {
        self.offsets
            .iter()
            .map(|(_, offsets)| offsets.iter().sum::<f64>() / offsets.len() as f64)
            .collect()
    }
}

/// Fold an onset detected in the following cycle back into `[0, 1)`.
///
/// Offsets strictly greater than one full stride have 1.0 subtracted once;
/// an offset of exactly 1.0 is left as-is. Reducing modulo 1.0 instead
/// would also bound repeated-cycle overshoots, but has not been selected as
/// the contracted behavior.
fn wrap_offset(raw: f64) -> f64 {
    if raw > 1.0 { raw - 1.0 } else { raw }
}

/// Extract per-stride phase offsets for each limb in `others`.
///
/// Slices `series` to the steady-state window for `window_ratio`, takes the
/// `reference` limb's first-contact steps as stride boundaries, and measures
/// each other limb's onset lag as a fraction of the enclosing stride. The
/// offset of the last stride is dropped, so `n` reference onsets yield
/// `n - 1` stride lengths and `n - 2` retained offsets per limb.
pub fn extract_phases(
    series: &ContactSeries,
    reference: Limb,
    others: &[Limb],
    window_ratio: f64,
) -> Result<PhaseExtraction> {
    for (i, &limb) in others.iter().enumerate() {
        if limb == reference || others[..i].contains(&limb) {
            return Err(ConfigError::DuplicateLimb(limb).into());
        }
    }

    let window = SteadyStateWindow::from_ratio(window_ratio, series.len())
        .map_err(GaitError::Configuration)?;
    let frames = series.window_frames(window);

    // Stride boundaries: reference-limb onsets, window-relative.
    let onsets: Vec<usize> = frames
        .iter()
        .enumerate()
        .filter(|(_, frame)| frame.first_contact(reference))
        .map(|(i, _)| i)
        .collect();
    if onsets.len() < 2 {
        return Err(GaitError::InsufficientStrideData {
            reference,
            onsets: onsets.len(),
            window,
        });
    }

    let stride_lengths: Vec<usize> = onsets.windows(2).map(|pair| pair[1] - pair[0]).collect();

    let mut offsets = Vec::with_capacity(others.len());
    for &limb in others {
        let mut limb_offsets = Vec::with_capacity(stride_lengths.len());
        for (&onset, &stride) in onsets.iter().zip(&stride_lengths) {
            // First onset of this limb at or after the stride boundary.
            let found = frames[onset..]
                .iter()
                .position(|frame| frame.first_contact(limb))
                .ok_or(GaitError::MissingContactEvent {
                    limb,
                    after: window.start() + onset,
                    window,
                })?;
            limb_offsets.push(wrap_offset(found as f64 / stride as f64));
        }
        // The last stride's offset is not bounded by a following onset pair.
        limb_offsets.pop();
        if limb_offsets.is_empty() {
            return Err(GaitError::InsufficientStrideData {
                reference,
                onsets: onsets.len(),
                window,
            });
        }
        offsets.push((limb, limb_offsets));
    }

    Ok(PhaseExtraction {
        reference,
        window,
        stride_lengths,
        offsets,
    })
}
