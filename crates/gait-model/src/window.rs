//! Steady-state window selection.

use crate::config::ConfigError;
use std::fmt;

/// Contiguous `[start, end)` sub-range of a contact series.
///
/// Discards startup and settling transients: for ratio `r` over a series of
/// length `n`, `start = floor((1 - r) * n)` and `end = floor(r * n)`.
/// Invariant: `start < end <= n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SteadyStateWindow {
    start: usize,
    end: usize,
}

impl SteadyStateWindow {
    /// Select the central steady-state slice of a series of length `len`.
    ///
    /// `ratio` must lie in `(0, 1]`; `ratio = 1.0` selects the full series.
    /// Fails when the floor arithmetic leaves an empty range.
    pub fn from_ratio(ratio: f64, len: usize) -> Result<Self, ConfigError> {
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(ConfigError::WindowRatio { ratio });
        }
        let start = ((1.0 - ratio) * len as f64).floor() as usize;
        let end = (ratio * len as f64).floor() as usize;
        if start >= end {
            return Err(ConfigError::EmptyWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// First index inside the window.
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last index inside the window.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of steps inside the window.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Windows are never empty by construction.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for SteadyStateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_ratio_selects_whole_series() {
        let window = SteadyStateWindow::from_ratio(1.0, 100).unwrap();
        assert_eq!(window.start(), 0);
        assert_eq!(window.end(), 100);
        assert_eq!(window.len(), 100);
    }

    #[test]
    fn test_window_shrinks_as_ratio_decreases() {
        let mut prev_len = usize::MAX;
        for ratio in [1.0, 0.9, 0.8, 0.7, 0.6] {
            let window = SteadyStateWindow::from_ratio(ratio, 1000).unwrap();
            assert!(window.len() < prev_len);
            prev_len = window.len();
        }
    }

    #[test]
    fn test_default_ratio_bounds() {
        let window = SteadyStateWindow::from_ratio(0.8, 1000).unwrap();
        assert_eq!(window.start(), 200);
        assert_eq!(window.end(), 800);
    }

    #[test]
    fn test_ratio_out_of_range_rejected() {
        assert!(matches!(
            SteadyStateWindow::from_ratio(0.0, 100),
            Err(ConfigError::WindowRatio { .. })
        ));
        assert!(matches!(
            SteadyStateWindow::from_ratio(1.5, 100),
            Err(ConfigError::WindowRatio { .. })
        ));
    }

    #[test]
    fn test_degenerate_arithmetic_rejected() {
        // ratio 0.5 puts both bounds at the midpoint
        assert!(matches!(
            SteadyStateWindow::from_ratio(0.5, 10),
            Err(ConfigError::EmptyWindow { start: 5, end: 5 })
        ));
        // and an empty series has no window at any ratio
        assert!(matches!(
            SteadyStateWindow::from_ratio(1.0, 0),
            Err(ConfigError::EmptyWindow { .. })
        ));
    }

    #[test]
    fn test_display_names_bounds() {
        let window = SteadyStateWindow::from_ratio(0.8, 10).unwrap();
        assert_eq!(window.to_string(), "[2, 8)");
    }
}
