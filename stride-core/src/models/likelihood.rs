use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Deadline-success projection for a single goal.
///
/// Velocities are in progress-points per day. `days_ahead` is positive when
/// the projected completion lands before the deadline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessLikelihood {
    /// Estimated probability of on-time completion, 0–100.
    pub probability: u8,
    /// Normalized projected completion date; display formatting is the
    /// caller's concern.
    pub projected_completion_date: NaiveDate,
    pub days_ahead: i64,
    pub required_velocity: f64,
    pub current_velocity: f64,
    pub velocity_gap: f64,
}
