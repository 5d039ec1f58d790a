//! Quick-action prioritization: a short, priority-sorted list of next
//! actions for a goal.

use chrono::{DateTime, Utc};

use stride_core::constants::{MAX_QUICK_ACTIONS, RISK_ESCALATION_DAYS, STALE_CHECK_IN_DAYS};
use stride_core::{
    ActionVariant, AnalyticsConfig, Goal, GoalHealthIndicators, HealthStatus, QuickAction,
};

use crate::temporal;

/// Candidate priorities. Higher surfaces first.
const PRIORITY_OVERDUE_CHECK_IN: u8 = 10;
const PRIORITY_RISK_REVIEW: u8 = 9;
const PRIORITY_HELP_REQUEST: u8 = 8;
const PRIORITY_TIMELINE_ADJUST: u8 = 7;
const PRIORITY_ROUTINE_CHECK_IN: u8 = 5;
const PRIORITY_KEY_RESULT_UPDATE: u8 = 4;

/// Days without a check-in before key-result progress counts as stale.
const KEY_RESULT_STALE_DAYS: i64 = 7;

/// Generate up to three next actions, sorted descending by priority.
pub fn generate(
    goal: &Goal,
    health: &GoalHealthIndicators,
    now: DateTime<Utc>,
    config: &AnalyticsConfig,
) -> Vec<QuickAction> {
    let mut actions = Vec::new();

    let days_since_check_in = goal
        .latest_check_in()
        .map(|c| temporal::days_ago(&c.date, now));

    // A check-in is always a candidate; a long gap, or no history at all,
    // makes it urgent.
    let overdue = days_since_check_in.map_or(true, |d| d >= STALE_CHECK_IN_DAYS);
    actions.push(QuickAction {
        label: "Check in on progress".into(),
        action: "open-check-in".into(),
        icon: "calendar".into(),
        variant: ActionVariant::Default,
        priority: if overdue {
            PRIORITY_OVERDUE_CHECK_IN
        } else {
            PRIORITY_ROUTINE_CHECK_IN
        },
    });

    // Key-result progress inherits staleness from the check-in gap.
    let key_results_stale = goal.key_results.iter().any(|kr| kr.is_incomplete())
        && days_since_check_in.map_or(true, |d| d >= KEY_RESULT_STALE_DAYS);
    if key_results_stale {
        actions.push(QuickAction {
            label: "Update key results".into(),
            action: "update-key-results".into(),
            icon: "target".into(),
            variant: ActionVariant::Default,
            priority: PRIORITY_KEY_RESULT_UPDATE,
        });
    }

    let escalated = goal.risks.iter().any(|r| {
        r.is_active()
            && r.is_high_severity()
            && temporal::days_ago(&r.updated_at, now) >= RISK_ESCALATION_DAYS
    });
    if escalated {
        actions.push(QuickAction {
            label: "Review risks".into(),
            action: "review-risks".into(),
            icon: "alert-triangle".into(),
            variant: ActionVariant::Danger,
            priority: PRIORITY_RISK_REVIEW,
        });
    }

    if health.factors.progress_velocity.value() < config.attention.velocity {
        actions.push(QuickAction {
            label: "Adjust timeline".into(),
            action: "adjust-timeline".into(),
            icon: "clock".into(),
            variant: ActionVariant::Warning,
            priority: PRIORITY_TIMELINE_ADJUST,
        });
    }

    if health.overall_health == HealthStatus::Critical && goal.has_champion() {
        actions.push(QuickAction {
            label: "Ask your champion for help".into(),
            action: "request-help".into(),
            icon: "users".into(),
            variant: ActionVariant::Warning,
            priority: PRIORITY_HELP_REQUEST,
        });
    }

    // Sort by priority value, not insertion order; stable sort keeps
    // evaluation order for ties.
    actions.sort_by(|a, b| b.priority.cmp(&a.priority));
    actions.truncate(MAX_QUICK_ACTIONS);
    actions
}
