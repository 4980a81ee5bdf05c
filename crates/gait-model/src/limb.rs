//! Limb identifiers and their fixed positions in the contact vector.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four legs of the quadruped.
///
/// Each limb has a fixed position in the per-frame contact vectors; all
/// indexing goes through [`Limb::index`] so the positional layout never
/// leaks into calling code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Limb {
    /// Front-left leg.
    FrontLeft,
    /// Hind-left leg.
    HindLeft,
    /// Front-right leg.
    FrontRight,
    /// Hind-right leg.
    HindRight,
}

impl Limb {
    /// Number of limbs tracked per contact frame.
    pub const COUNT: usize = 4;

    /// All limbs in contact-vector order.
    pub const ALL: [Limb; Limb::COUNT] = [
        Limb::FrontLeft,
        Limb::HindLeft,
        Limb::FrontRight,
        Limb::HindRight,
    ];

    /// Position of this limb in the per-frame contact vectors.
    pub fn index(self) -> usize {
        match self {
            Limb::FrontLeft => 0,
            Limb::HindLeft => 1,
            Limb::FrontRight => 2,
            Limb::HindRight => 3,
        }
    }

    /// Human-readable name, e.g. "front right".
    pub fn label(self) -> &'static str {
        match self {
            Limb::FrontLeft => "front left",
            Limb::HindLeft => "hind left",
            Limb::FrontRight => "front right",
            Limb::HindRight => "hind right",
        }
    }

    /// The other three limbs, in contact-vector order.
    pub fn others(self) -> [Limb; Limb::COUNT - 1] {
        let mut out = [self; Limb::COUNT - 1];
        let mut n = 0;
        for limb in Limb::ALL {
            if limb != self {
                out[n] = limb;
                n += 1;
            }
        }
        out
    }
}

impl fmt::Display for Limb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
