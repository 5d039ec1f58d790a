//! Health aggregation: five factors, fixed weights, one composite score.

use chrono::{DateTime, Utc};

use stride_core::{
    AnalyticsConfig, Goal, GoalHealthIndicators, HealthFactors, HealthStatus, Score,
};

use crate::factors;
use crate::velocity;

/// Compute the composite health assessment for a goal.
///
/// ```text
/// healthScore = w_v·velocity + w_c·checkInFreq + w_r·(100 − riskSeverity)
///             + w_t·confidenceTrend + w_m·milestoneCompletion
/// ```
///
/// Risk severity is the one inverted factor. The result is rounded and
/// clamped to [0, 100].
pub fn compute(goal: &Goal, now: DateTime<Utc>, config: &AnalyticsConfig) -> GoalHealthIndicators {
    let estimate = velocity::estimate(goal, now);

    let factors = HealthFactors {
        progress_velocity: factors::progress_velocity::calculate(goal, &estimate, now),
        check_in_frequency: factors::check_in_frequency::calculate(goal, now),
        risk_severity: factors::risk_severity::calculate(goal),
        confidence_trend: factors::confidence_trend::calculate(goal),
        milestone_completion: factors::milestone_completion::calculate(goal),
    };

    let weights = &config.weights;
    let weighted = weights.progress_velocity * factors.progress_velocity.value()
        + weights.check_in_frequency * factors.check_in_frequency.value()
        + weights.risk_severity * (Score::MAX - factors.risk_severity.value())
        + weights.confidence_trend * factors.confidence_trend.value()
        + weights.milestone_completion * factors.milestone_completion.value();
    let health_score = Score::new(weighted).rounded();

    GoalHealthIndicators {
        overall_health: classify(health_score, config),
        health_score,
        factors,
        needs_attention: attention_flags(&factors, config),
    }
}

/// Map a health score onto the status ladder.
fn classify(score: u8, config: &AnalyticsConfig) -> HealthStatus {
    if score >= config.status.healthy {
        HealthStatus::Healthy
    } else if score >= config.status.needs_attention {
        HealthStatus::NeedsAttention
    } else {
        HealthStatus::Critical
    }
}

/// One human-readable flag per factor past its attention threshold.
///
/// All thresholds flag below except risk, which flags above (higher risk
/// severity is worse).
fn attention_flags(factors: &HealthFactors, config: &AnalyticsConfig) -> Vec<String> {
    let attention = &config.attention;
    let mut flags = Vec::new();

    if factors.progress_velocity.value() < attention.velocity {
        flags.push("progress velocity is behind schedule".to_string());
    }
    if factors.check_in_frequency.value() < attention.check_in {
        flags.push("check-ins are infrequent".to_string());
    }
    if factors.risk_severity.value() > attention.risk {
        flags.push("active risks are severe".to_string());
    }
    if factors.confidence_trend.value() < attention.confidence {
        flags.push("confidence is trending down".to_string());
    }
    if factors.milestone_completion.value() < attention.milestone {
        flags.push("milestones are falling behind".to_string());
    }

    flags
}
