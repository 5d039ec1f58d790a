use serde::{Deserialize, Serialize};

/// Severity of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

/// What kind of insight a recommendation carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Alert,
    Pattern,
    Suggestion,
}

/// An actionable recommendation surfaced for a goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmartRecommendation {
    /// Stable kebab-case rule id, e.g. `velocity-behind`.
    pub id: String,
    pub kind: RecommendationKind,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    /// Whether the presentation layer should offer a follow-up action.
    pub actionable: bool,
    /// Quick-action id to trigger when the recommendation is acted on.
    pub quick_action: Option<String>,
    /// Icon name for the presentation layer.
    pub icon: String,
}
