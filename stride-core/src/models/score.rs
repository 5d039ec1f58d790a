use serde::{Deserialize, Serialize};
use std::fmt;

/// Factor score clamped to [0.0, 100.0].
///
/// Every health factor produces one of these; the aggregator combines them
/// into the overall health score.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    /// Maximum score.
    pub const MAX: f64 = 100.0;
    /// Neutral midpoint, used as the fallback when a trend is ambiguous.
    pub const NEUTRAL: f64 = 50.0;

    /// Create a new Score, clamping to [0.0, 100.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, Self::MAX))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Round to the nearest whole point.
    pub fn rounded(self) -> u8 {
        self.0.round() as u8
    }
}

impl Default for Score {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Score> for f64 {
    fn from(s: Score) -> Self {
        s.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_values() {
        assert_eq!(Score::new(150.0).value(), 100.0);
        assert_eq!(Score::new(-3.0).value(), 0.0);
        assert_eq!(Score::new(42.5).value(), 42.5);
    }

    #[test]
    fn rounds_to_nearest_point() {
        assert_eq!(Score::new(74.5).rounded(), 75);
        assert_eq!(Score::new(74.4).rounded(), 74);
    }
}
