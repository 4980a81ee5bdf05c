//! Numeric precision of the rollout pipeline.

use serde::{Deserialize, Serialize};

/// Floating-point precision applied at the rollout boundary.
///
/// The pipeline computes in `f64`; `Single` rounds every observation and
/// action through `f32` as it crosses the policy/environment boundary,
/// matching runtimes that execute in single precision. An explicit
/// parameter rather than a process-global toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Precision {
    /// Round through `f32` at the rollout boundary.
    Single,
    /// Full `f64` throughout.
    #[default]
    Double,
}

impl Precision {
    /// Quantize one value.
    pub fn quantize(self, value: f64) -> f64 {
        match self {
            Precision::Single => value as f32 as f64,
            Precision::Double => value,
        }
    }

    /// Quantize a vector in place.
    pub fn quantize_all(self, values: &mut [f64]) {
        if self == Precision::Single {
            for value in values {
                *value = *value as f32 as f64;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_is_identity() {
        let x = std::f64::consts::PI;
        assert_eq!(Precision::Double.quantize(x), x);
    }

    #[test]
    fn test_single_rounds_through_f32() {
        let x = std::f64::consts::PI;
        assert_eq!(Precision::Single.quantize(x), std::f64::consts::PI as f32 as f64);
        assert_ne!(Precision::Single.quantize(x), x);
    }

    #[test]
    fn test_quantize_all_in_place() {
        let mut values = [1.0f64 / 3.0, 2.0 / 3.0];
        Precision::Single.quantize_all(&mut values);
        assert_eq!(values[0], (1.0f64 / 3.0) as f32 as f64);
        assert_eq!(values[1], (2.0f64 / 3.0) as f32 as f64);
    }
}
