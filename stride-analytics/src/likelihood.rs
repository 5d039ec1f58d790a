//! Success-likelihood projection: velocity gap, projected completion date,
//! and a blended on-time probability.

use chrono::{DateTime, Duration, Utc};

use stride_core::{Goal, GoalHealthIndicators, SuccessLikelihood};

use crate::temporal;
use crate::velocity;

/// Weight of the velocity component in the probability blend.
const VELOCITY_WEIGHT: f64 = 0.6;
/// Weight of the health component in the probability blend.
const HEALTH_WEIGHT: f64 = 0.4;

/// Project completion against the deadline.
///
/// The health assessment feeds the probability blend; callers compute it
/// once and pass it in.
pub fn project(
    goal: &Goal,
    health: &GoalHealthIndicators,
    now: DateTime<Utc>,
) -> SuccessLikelihood {
    let estimate = velocity::estimate(goal, now);
    let progress = f64::from(goal.progress_clamped());
    let days_remaining = temporal::days_remaining(&goal.deadline, now);

    // With no observable velocity there is nothing to extrapolate; assume
    // the deadline itself.
    let projected_days_remaining = if estimate.current > 0.0 {
        ((100.0 - progress) / estimate.current).round() as i64
    } else {
        days_remaining
    };

    let velocity_factor = if estimate.required <= 0.0 {
        1.0
    } else {
        (estimate.current / estimate.required).min(1.0)
    };
    let health_factor = f64::from(health.health_score) / 100.0;
    let probability = (100.0 * (VELOCITY_WEIGHT * velocity_factor + HEALTH_WEIGHT * health_factor))
        .round()
        .clamp(0.0, 100.0) as u8;

    SuccessLikelihood {
        probability,
        projected_completion_date: (now + Duration::days(projected_days_remaining)).date_naive(),
        days_ahead: days_remaining - projected_days_remaining,
        required_velocity: estimate.required,
        current_velocity: estimate.current,
        velocity_gap: estimate.current - estimate.required,
    }
}
