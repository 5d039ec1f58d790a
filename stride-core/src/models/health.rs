use serde::{Deserialize, Serialize};

use super::score::Score;

/// Composite health assessment for a single goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalHealthIndicators {
    pub overall_health: HealthStatus,
    /// Weighted composite of the five factors, rounded, 0–100.
    pub health_score: u8,
    pub factors: HealthFactors,
    /// Human-readable flags, one per factor past its attention threshold.
    pub needs_attention: Vec<String>,
}

/// The five independent health factors, each 0–100.
///
/// `risk_severity` is the one inverted factor: higher means worse, and the
/// aggregator scores `100 − risk_severity`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HealthFactors {
    pub progress_velocity: Score,
    pub check_in_frequency: Score,
    pub risk_severity: Score,
    pub confidence_trend: Score,
    pub milestone_completion: Score,
}

/// Overall status classification derived from the health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HealthStatus {
    Healthy,
    NeedsAttention,
    Critical,
}
