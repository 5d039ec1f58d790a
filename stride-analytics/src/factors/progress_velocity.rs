use chrono::{DateTime, Utc};

use stride_core::{Goal, Score};

use crate::temporal;
use crate::velocity::VelocityEstimate;

/// Progress velocity factor: observed velocity as a percentage of the
/// velocity required to hit the deadline, capped at 100.
///
/// With no time left the comparison is meaningless, so the factor falls
/// back to raw progress. A non-positive requirement means nothing is left
/// to do and scores full.
pub fn calculate(goal: &Goal, velocity: &VelocityEstimate, now: DateTime<Utc>) -> Score {
    let days_remaining = temporal::days_remaining(&goal.deadline, now);
    if days_remaining <= 0 {
        return Score::new(f64::from(goal.progress_clamped()));
    }
    if velocity.required <= 0.0 {
        return Score::new(Score::MAX);
    }
    Score::new(velocity.current / velocity.required * 100.0)
}
