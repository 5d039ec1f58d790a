use chrono::{DateTime, Utc};

use stride_core::constants::CONSISTENCY_MIN_CHECK_INS;
use stride_core::{Goal, Score};

use crate::temporal;

/// Recency tiers: (max days since the latest check-in, score).
const FREQUENCY_TIERS: &[(i64, f64)] = &[(7, 100.0), (14, 75.0), (21, 50.0), (30, 25.0)];

/// Bonus for a consistent history of three or more check-ins.
const CONSISTENCY_BONUS: f64 = 10.0;

/// Check-in frequency factor, from days since the most recent check-in.
///
/// A goal never checked into scores 0. The consistency bonus is capped at
/// the factor ceiling by [`Score`] clamping.
pub fn calculate(goal: &Goal, now: DateTime<Utc>) -> Score {
    let Some(latest) = goal.latest_check_in() else {
        return Score::new(0.0);
    };

    let days = temporal::days_ago(&latest.date, now);
    let base = FREQUENCY_TIERS
        .iter()
        .find(|(limit, _)| days <= *limit)
        .map_or(0.0, |(_, score)| *score);

    let bonus = if goal.check_ins.len() >= CONSISTENCY_MIN_CHECK_INS {
        CONSISTENCY_BONUS
    } else {
        0.0
    };

    Score::new(base + bonus)
}
