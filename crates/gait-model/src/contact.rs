//! Per-step contact records and the full-rollout series.

use crate::limb::Limb;
use crate::window::SteadyStateWindow;

/// One simulation timestep's contact record.
///
/// `first_contact` is true exactly on the step a foot newly touches the
/// ground; `previous_contact` is true while the foot is in stance.
/// Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactFrame {
    first_contact: [bool; Limb::COUNT],
    previous_contact: [bool; Limb::COUNT],
}

impl ContactFrame {
    /// Build a frame from per-limb flag vectors in contact-vector order.
    pub fn new(first_contact: [bool; Limb::COUNT], previous_contact: [bool; Limb::COUNT]) -> Self {
        Self {
            first_contact,
            previous_contact,
        }
    }

    /// Whether `limb` made first ground contact at this step.
    pub fn first_contact(&self, limb: Limb) -> bool {
        self.first_contact[limb.index()]
    }

    /// Whether `limb` is in contact at this step.
    pub fn in_contact(&self, limb: Limb) -> bool {
        self.previous_contact[limb.index()]
    }
}

/// Ordered sequence of [`ContactFrame`] over a full rollout.
///
/// Length equals the number of simulation steps. Handed off whole by the
/// rollout producer; the analysis side only ever reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSeries {
    frames: Vec<ContactFrame>,
}

impl ContactSeries {
    /// Create an empty series.
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Create an empty series with room for `steps` frames.
    pub fn with_capacity(steps: usize) -> Self {
        Self {
            frames: Vec::with_capacity(steps),
        }
    }

    /// Append the next step's frame.
    pub fn push(&mut self, frame: ContactFrame) {
        self.frames.push(frame);
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no steps have been recorded.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// All frames in step order.
    pub fn frames(&self) -> &[ContactFrame] {
        &self.frames
    }

    /// The frames inside a steady-state window.
    pub fn window_frames(&self, window: SteadyStateWindow) -> &[ContactFrame] {
        &self.frames[window.start()..window.end()]
    }
}

impl From<Vec<ContactFrame>> for ContactSeries {
    fn from(frames: Vec<ContactFrame>) -> Self {
        Self { frames }
    }
}
