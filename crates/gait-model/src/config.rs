//! Analysis configuration and validation.

use crate::limb::Limb;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Malformed analysis configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("window ratio must lie in (0, 1], got {ratio}")]
    WindowRatio { ratio: f64 },

    #[error("steady-state window [{start}, {end}) is empty")]
    EmptyWindow { start: usize, end: usize },

    #[error("expected {expected} phase targets, got {actual}")]
    TargetCount { expected: usize, actual: usize },

    #[error("phase target {value} outside [0, 1)")]
    TargetRange { value: f64 },

    #[error("duplicate limb {0} in limb configuration")]
    DuplicateLimb(Limb),
}

/// How to analyze one contact series.
///
/// `targets` are rank-ordered: after sorting the observed non-reference
/// phases ascending, entry `k` is the desired value for rank `k`. They are
/// not keyed by limb identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Steady-state window ratio in `(0, 1]`.
    pub window_ratio: f64,
    /// Limb whose contact onsets define stride boundaries.
    pub reference: Limb,
    /// Target phase offsets in rank order, each in `[0, 1)`.
    pub targets: Vec<f64>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            window_ratio: 0.8,
            reference: Limb::FrontRight,
            targets: vec![0.25, 0.5, 0.75],
        }
    }
}

impl AnalysisConfig {
    /// The non-reference limbs, in contact-vector order.
    pub fn other_limbs(&self) -> [Limb; Limb::COUNT - 1] {
        self.reference.others()
    }

    /// Check the configuration against the limb set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.window_ratio > 0.0 && self.window_ratio <= 1.0) {
            return Err(ConfigError::WindowRatio {
                ratio: self.window_ratio,
            });
        }
        if self.targets.len() != Limb::COUNT - 1 {
            return Err(ConfigError::TargetCount {
                expected: Limb::COUNT - 1,
                actual: self.targets.len(),
            });
        }
        for &value in &self.targets {
            if !(0.0..1.0).contains(&value) {
                return Err(ConfigError::TargetRange { value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.reference, Limb::FrontRight);
        assert_eq!(config.targets, vec![0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_target_count_mismatch_rejected() {
        let config = AnalysisConfig {
            targets: vec![0.25, 0.5],
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TargetCount {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_target_out_of_range_rejected() {
        let config = AnalysisConfig {
            targets: vec![0.25, 0.5, 1.0],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TargetRange { .. })
        ));
    }

    #[test]
    fn test_bad_window_ratio_rejected() {
        let config = AnalysisConfig {
            window_ratio: -0.1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::WindowRatio { .. })
        ));
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = AnalysisConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: AnalysisConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.reference, config.reference);
        assert_eq!(back.targets, config.targets);
    }
}
