//! Rule-based recommendation generation.
//!
//! Nine independent rules over the goal, its health assessment, and its
//! success projection. Each rule pushes at most one entry; the result is
//! the union of everything that fired, in fixed presentation order.

use chrono::{DateTime, Utc};

use stride_core::constants::{
    CONSISTENCY_MIN_CHECK_INS, HIGH_PROBABILITY, KEY_RESULT_DUE_SOON_DAYS, LOW_PROBABILITY,
    RISK_ESCALATION_DAYS, STALE_CHECK_IN_DAYS, VERY_STALE_CHECK_IN_DAYS,
};
use stride_core::{
    AnalyticsConfig, Goal, GoalHealthIndicators, RecommendationKind, Severity,
    SmartRecommendation, SuccessLikelihood,
};

use crate::temporal;

/// Velocity gap below which a behind-schedule alert escalates to critical.
const CRITICAL_VELOCITY_GAP: f64 = -0.5;
/// Velocity score above which a check-in streak counts as a working pattern.
const CONSISTENCY_VELOCITY_FLOOR: f64 = 75.0;
/// Confidence trend score below which a decline alert fires.
const CONFIDENCE_DECLINE_FLOOR: f64 = 30.0;
/// Progress at or above which a missing champion stops mattering.
const CHAMPION_PROGRESS_CEILING: u8 = 70;

/// Generate the full set of recommendations that apply to a goal.
pub fn generate(
    goal: &Goal,
    health: &GoalHealthIndicators,
    likelihood: &SuccessLikelihood,
    now: DateTime<Utc>,
    config: &AnalyticsConfig,
) -> Vec<SmartRecommendation> {
    let mut recs = Vec::new();

    // Velocity behind schedule.
    if health.factors.progress_velocity.value() < config.attention.velocity {
        let severity = if likelihood.velocity_gap < CRITICAL_VELOCITY_GAP {
            Severity::Critical
        } else {
            Severity::Warning
        };
        recs.push(SmartRecommendation {
            id: "velocity-behind".into(),
            kind: RecommendationKind::Alert,
            severity,
            title: "Progress is behind schedule".into(),
            description: format!(
                "current velocity is {:.1} points/day against a required {:.1}",
                likelihood.current_velocity, likelihood.required_velocity
            ),
            actionable: true,
            quick_action: Some("adjust-timeline".into()),
            icon: "trending-down".into(),
        });
    }

    // Stale check-ins.
    if let Some(latest) = goal.latest_check_in() {
        let days = temporal::days_ago(&latest.date, now);
        if days >= STALE_CHECK_IN_DAYS {
            let severity = if days >= VERY_STALE_CHECK_IN_DAYS {
                Severity::Warning
            } else {
                Severity::Info
            };
            recs.push(SmartRecommendation {
                id: "check-in-overdue".into(),
                kind: RecommendationKind::Alert,
                severity,
                title: "No recent check-ins".into(),
                description: format!("last check-in was {days} days ago"),
                actionable: true,
                quick_action: Some("open-check-in".into()),
                icon: "calendar".into(),
            });
        }
    }

    // Escalated risks.
    let escalated = goal
        .risks
        .iter()
        .filter(|r| {
            r.is_active()
                && r.is_high_severity()
                && temporal::days_ago(&r.updated_at, now) >= RISK_ESCALATION_DAYS
        })
        .count();
    if escalated > 0 {
        recs.push(SmartRecommendation {
            id: "risk-escalation".into(),
            kind: RecommendationKind::Alert,
            severity: Severity::Critical,
            title: "Risks need mitigation".into(),
            description: format!(
                "{escalated} high-severity risk(s) active and unmitigated for \
                 {RISK_ESCALATION_DAYS} days or more"
            ),
            actionable: true,
            quick_action: Some("review-risks".into()),
            icon: "alert-triangle".into(),
        });
    }

    // Success trajectory.
    if likelihood.probability >= HIGH_PROBABILITY {
        recs.push(SmartRecommendation {
            id: "success-trajectory".into(),
            kind: RecommendationKind::Pattern,
            severity: Severity::Info,
            title: "On track to succeed".into(),
            description: format!(
                "{}% probability of on-time completion",
                likelihood.probability
            ),
            actionable: false,
            quick_action: None,
            icon: "award".into(),
        });
    }

    // At risk of missing the deadline.
    if likelihood.probability < LOW_PROBABILITY {
        recs.push(SmartRecommendation {
            id: "at-risk".into(),
            kind: RecommendationKind::Alert,
            severity: Severity::Warning,
            title: "Goal is at risk".into(),
            description: format!(
                "only {}% probability of on-time completion",
                likelihood.probability
            ),
            actionable: true,
            quick_action: Some("adjust-timeline".into()),
            icon: "alert-circle".into(),
        });
    }

    // Missing champion.
    if !goal.has_champion() && goal.progress_clamped() < CHAMPION_PROGRESS_CEILING {
        recs.push(SmartRecommendation {
            id: "recruit-champion".into(),
            kind: RecommendationKind::Suggestion,
            severity: Severity::Info,
            title: "Recruit a champion".into(),
            description: "goals with a champion collaborator complete more often".into(),
            actionable: true,
            quick_action: Some("invite-collaborator".into()),
            icon: "users".into(),
        });
    }

    // Consistency paying off.
    if goal.check_ins.len() >= CONSISTENCY_MIN_CHECK_INS
        && health.factors.progress_velocity.value() > CONSISTENCY_VELOCITY_FLOOR
    {
        recs.push(SmartRecommendation {
            id: "consistent-check-ins".into(),
            kind: RecommendationKind::Pattern,
            severity: Severity::Info,
            title: "Consistency is paying off".into(),
            description: format!(
                "{} check-ins with velocity ahead of plan",
                goal.check_ins.len()
            ),
            actionable: false,
            quick_action: None,
            icon: "check-circle".into(),
        });
    }

    // Key results due soon.
    let due_soon = goal
        .key_results
        .iter()
        .filter(|kr| {
            let days = temporal::days_remaining(&kr.due_date, now);
            kr.is_incomplete() && (0..=KEY_RESULT_DUE_SOON_DAYS).contains(&days)
        })
        .count();
    if due_soon > 0 {
        recs.push(SmartRecommendation {
            id: "key-results-due".into(),
            kind: RecommendationKind::Suggestion,
            severity: Severity::Info,
            title: "Key results due soon".into(),
            description: format!(
                "{due_soon} key result(s) due within {KEY_RESULT_DUE_SOON_DAYS} days are \
                 partially complete"
            ),
            actionable: true,
            quick_action: Some("update-key-results".into()),
            icon: "target".into(),
        });
    }

    // Confidence declining.
    if goal.check_ins.len() >= 2
        && health.factors.confidence_trend.value() < CONFIDENCE_DECLINE_FLOOR
    {
        recs.push(SmartRecommendation {
            id: "confidence-declining".into(),
            kind: RecommendationKind::Alert,
            severity: Severity::Warning,
            title: "Confidence is declining".into(),
            description: "recent check-in moods show a downward trend".into(),
            actionable: true,
            quick_action: Some("open-check-in".into()),
            icon: "heart".into(),
        });
    }

    recs
}
