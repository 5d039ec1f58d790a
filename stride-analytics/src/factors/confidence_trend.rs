use stride_core::constants::DEFAULT_CONFIDENCE_SCORE;
use stride_core::{Goal, Mood, Score};

/// Mood-pair scores for the two most recent check-ins (latest, previous).
const BOTH_POSITIVE: f64 = 100.0;
const LATEST_POSITIVE: f64 = 80.0;
const BOTH_CONCERNED: f64 = 0.0;
const LATEST_CONCERNED: f64 = 30.0;

/// Confidence trend factor.
///
/// With fewer than two check-ins there is no trend to read, so the factor
/// falls back to the self-reported confidence score (0–10 scale, default 7).
pub fn calculate(goal: &Goal) -> Score {
    if goal.check_ins.len() < 2 {
        let reported = goal
            .confidence_score
            .unwrap_or(DEFAULT_CONFIDENCE_SCORE)
            .min(10);
        return Score::new(f64::from(reported) / 10.0 * 100.0);
    }

    let latest = goal.check_ins[0].mood;
    let previous = goal.check_ins[1].mood;
    let score = match (latest, previous) {
        (Mood::Positive, Mood::Positive) => BOTH_POSITIVE,
        (Mood::Positive, _) => LATEST_POSITIVE,
        (Mood::Concerned, Mood::Concerned) => BOTH_CONCERNED,
        (Mood::Concerned, _) => LATEST_CONCERNED,
        _ => Score::NEUTRAL,
    };
    Score::new(score)
}
