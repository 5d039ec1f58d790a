use chrono::{DateTime, Utc};

use stride_core::{
    AnalyticsConfig, Goal, GoalHealthIndicators, QuickAction, SmartRecommendation,
    SuccessLikelihood,
};

use crate::{health, likelihood, quick_actions, recommendations};

/// Analytics engine: the four public operations over a goal snapshot,
/// sharing one configuration.
///
/// Every method is pure and reentrant; "now" is always supplied by the
/// caller so results are reproducible.
pub struct AnalyticsEngine {
    config: AnalyticsConfig,
}

impl AnalyticsEngine {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self {
            config: AnalyticsConfig::default(),
        }
    }

    /// Create with a custom configuration.
    pub fn with_config(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Get the active configuration.
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Composite health assessment for a goal.
    pub fn goal_health(&self, goal: &Goal, now: DateTime<Utc>) -> GoalHealthIndicators {
        let health = health::compute(goal, now, &self.config);
        tracing::debug!(
            goal_id = %goal.id,
            health_score = health.health_score,
            status = ?health.overall_health,
            "computed goal health"
        );
        health
    }

    /// Deadline-success projection for a goal.
    pub fn success_likelihood(&self, goal: &Goal, now: DateTime<Utc>) -> SuccessLikelihood {
        let health = health::compute(goal, now, &self.config);
        let projection = likelihood::project(goal, &health, now);
        tracing::debug!(
            goal_id = %goal.id,
            probability = projection.probability,
            days_ahead = projection.days_ahead,
            "projected success likelihood"
        );
        projection
    }

    /// Ranked recommendations for a goal.
    ///
    /// `all_goals` is accepted for future cross-goal rules; the current
    /// rule set only reads `goal`.
    pub fn smart_recommendations(
        &self,
        goal: &Goal,
        _all_goals: &[Goal],
        now: DateTime<Utc>,
    ) -> Vec<SmartRecommendation> {
        let health = health::compute(goal, now, &self.config);
        let projection = likelihood::project(goal, &health, now);
        let recs = recommendations::generate(goal, &health, &projection, now, &self.config);
        tracing::debug!(goal_id = %goal.id, count = recs.len(), "generated recommendations");
        recs
    }

    /// Up to three priority-sorted next actions for a goal.
    pub fn quick_actions(&self, goal: &Goal, now: DateTime<Utc>) -> Vec<QuickAction> {
        let health = health::compute(goal, now, &self.config);
        let actions = quick_actions::generate(goal, &health, now, &self.config);
        tracing::debug!(goal_id = %goal.id, count = actions.len(), "generated quick actions");
        actions
    }
}

impl Default for AnalyticsEngine {
    fn default() -> Self {
        Self::new()
    }
}
