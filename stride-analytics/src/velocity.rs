//! Shared velocity estimation, in progress-points per day.
//!
//! Both the progress-velocity factor and the success-likelihood projector
//! compare observed against required velocity; they must agree on the
//! numbers, so both call here.

use chrono::{DateTime, Utc};

use stride_core::Goal;

use crate::temporal;

/// Current and required progress velocity for a goal.
#[derive(Debug, Clone, Copy)]
pub struct VelocityEstimate {
    /// Observed rate of progress. Negative when progress moved backwards.
    pub current: f64,
    /// Rate needed to finish by the deadline. 0.0 when no time remains;
    /// callers treat a non-positive requirement as already met.
    pub required: f64,
}

/// Estimate velocities for a goal at `now`.
///
/// With two or more check-ins the current velocity is `Δprogress / Δdays`
/// over the most recent pair (Δdays floored to 1). With fewer, it is
/// estimated as `progress / elapsed`, where elapsed time is inferred from
/// the horizon hint and the remaining days.
pub fn estimate(goal: &Goal, now: DateTime<Utc>) -> VelocityEstimate {
    let progress = f64::from(goal.progress_clamped());
    let days_remaining = temporal::days_remaining(&goal.deadline, now);

    let required = if days_remaining > 0 {
        (100.0 - progress) / days_remaining as f64
    } else {
        0.0
    };

    let current = match (goal.check_ins.first(), goal.check_ins.get(1)) {
        (Some(latest), Some(previous)) => {
            let delta_progress =
                f64::from(latest.progress.min(100)) - f64::from(previous.progress.min(100));
            let delta_days = (temporal::days_ago(&previous.date, now)
                - temporal::days_ago(&latest.date, now))
            .max(1);
            delta_progress / delta_days as f64
        }
        _ => {
            let elapsed = (temporal::estimated_total_days(goal.time_horizon.as_ref())
                - days_remaining)
                .max(1);
            progress / elapsed as f64
        }
    };

    VelocityEstimate { current, required }
}
