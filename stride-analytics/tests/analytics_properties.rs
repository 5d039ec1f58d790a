use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use stride_analytics::AnalyticsEngine;
use stride_core::*;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

fn date_string(offset_days: i64) -> String {
    (fixed_now() + Duration::days(offset_days))
        .format("%Y-%m-%d")
        .to_string()
}

fn arb_mood() -> impl Strategy<Value = Mood> {
    prop_oneof![
        Just(Mood::Positive),
        Just(Mood::Neutral),
        Just(Mood::Concerned),
    ]
}

fn arb_risk() -> impl Strategy<Value = Risk> {
    (
        prop_oneof![
            Just(RiskStatus::Active),
            Just(RiskStatus::Mitigating),
            Just(RiskStatus::Resolved),
        ],
        prop_oneof![
            Just(RiskSeverity::Low),
            Just(RiskSeverity::Medium),
            Just(RiskSeverity::High),
            Just(RiskSeverity::Critical),
        ],
        0i64..40,
    )
        .prop_map(|(status, severity, days)| Risk {
            title: "Generated risk".to_string(),
            status,
            severity,
            updated_at: format!("{days} days ago"),
        })
}

/// Check-in histories are most recent first; sort generated entries to
/// keep that contract.
fn arb_check_ins() -> impl Strategy<Value = Vec<CheckIn>> {
    proptest::collection::vec((0i64..60, 0u8..=150, arb_mood()), 0..5).prop_map(|mut entries| {
        entries.sort_by_key(|(days, _, _)| *days);
        entries
            .into_iter()
            .map(|(days, progress, mood)| CheckIn {
                date: format!("{days} days ago"),
                progress,
                mood,
            })
            .collect()
    })
}

/// Deliberately hostile goals: out-of-range progress and confidence,
/// deadlines on both sides of now.
fn arb_goal() -> impl Strategy<Value = Goal> {
    (
        0u8..=250,
        -60i64..60,
        arb_check_ins(),
        proptest::collection::vec(arb_risk(), 0..4),
        proptest::collection::vec(any::<bool>(), 0..5),
        proptest::option::of(0u8..=12),
    )
        .prop_map(
            |(progress, deadline_offset, check_ins, risks, milestones, confidence_score)| Goal {
                id: "goal-under-test".to_string(),
                title: "Generated goal".to_string(),
                progress,
                deadline: date_string(deadline_offset),
                time_horizon: None,
                check_ins,
                risks,
                key_results: vec![],
                milestones: milestones
                    .into_iter()
                    .enumerate()
                    .map(|(i, completed)| Milestone {
                        title: format!("Milestone {i}"),
                        completed,
                    })
                    .collect(),
                collaborators: vec![],
                confidence_score,
            },
        )
}

// ── Range invariants ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn health_and_probability_stay_in_range(goal in arb_goal()) {
        let engine = AnalyticsEngine::new();
        let health = engine.goal_health(&goal, fixed_now());

        prop_assert!(health.health_score <= 100);
        for value in [
            health.factors.progress_velocity.value(),
            health.factors.check_in_frequency.value(),
            health.factors.risk_severity.value(),
            health.factors.confidence_trend.value(),
            health.factors.milestone_completion.value(),
        ] {
            prop_assert!(
                (0.0..=100.0).contains(&value),
                "factor out of range: {}",
                value
            );
        }

        let likelihood = engine.success_likelihood(&goal, fixed_now());
        prop_assert!(likelihood.probability <= 100);

        let actions = engine.quick_actions(&goal, fixed_now());
        prop_assert!(actions.len() <= 3);
    }
}

// ── Absent collections degrade, never error ──────────────────────────────

proptest! {
    #[test]
    fn absent_collections_use_documented_defaults(goal in arb_goal()) {
        let engine = AnalyticsEngine::new();
        let mut stripped = goal;
        stripped.risks.clear();
        stripped.milestones.clear();

        let health = engine.goal_health(&stripped, fixed_now());
        prop_assert_eq!(health.factors.risk_severity.value(), 0.0);
        prop_assert_eq!(health.factors.milestone_completion.value(), 100.0);
    }
}

// ── Monotonicity in progress ─────────────────────────────────────────────

proptest! {
    #[test]
    fn velocity_factor_monotonic_in_progress(goal in arb_goal(), bump in 1u8..40) {
        let engine = AnalyticsEngine::new();
        let mut lower = goal;
        lower.progress = lower.progress.min(100);
        let mut higher = lower.clone();
        higher.progress = lower.progress.saturating_add(bump).min(100);

        let low = engine
            .goal_health(&lower, fixed_now())
            .factors
            .progress_velocity
            .value();
        let high = engine
            .goal_health(&higher, fixed_now())
            .factors
            .progress_velocity
            .value();
        prop_assert!(
            high + 1e-9 >= low,
            "raising progress lowered the velocity factor: {} -> {}",
            low,
            high
        );
    }
}

// ── Purity ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn repeated_evaluation_is_identical(goal in arb_goal()) {
        let engine = AnalyticsEngine::new();
        let now = fixed_now();

        let h1 = engine.goal_health(&goal, now);
        let h2 = engine.goal_health(&goal, now);
        prop_assert_eq!(
            serde_json::to_value(&h1).unwrap(),
            serde_json::to_value(&h2).unwrap()
        );

        let l1 = engine.success_likelihood(&goal, now);
        let l2 = engine.success_likelihood(&goal, now);
        prop_assert_eq!(
            serde_json::to_value(&l1).unwrap(),
            serde_json::to_value(&l2).unwrap()
        );

        let r1 = engine.smart_recommendations(&goal, &[], now);
        let r2 = engine.smart_recommendations(&goal, &[], now);
        prop_assert_eq!(
            serde_json::to_value(&r1).unwrap(),
            serde_json::to_value(&r2).unwrap()
        );

        let q1 = engine.quick_actions(&goal, now);
        let q2 = engine.quick_actions(&goal, now);
        prop_assert_eq!(
            serde_json::to_value(&q1).unwrap(),
            serde_json::to_value(&q2).unwrap()
        );
    }
}
