//! Domain types and result models for goal analytics.

pub mod collaborator;
pub mod goal;
pub mod health;
pub mod key_result;
pub mod likelihood;
pub mod quick_action;
pub mod recommendation;
pub mod risk;
pub mod score;

pub use collaborator::{Collaborator, CollaboratorRole};
pub use goal::{CheckIn, Goal, Mood, TimeHorizon};
pub use health::{GoalHealthIndicators, HealthFactors, HealthStatus};
pub use key_result::{KeyResult, Milestone};
pub use likelihood::SuccessLikelihood;
pub use quick_action::{ActionVariant, QuickAction};
pub use recommendation::{RecommendationKind, Severity, SmartRecommendation};
pub use risk::{Risk, RiskSeverity, RiskStatus};
pub use score::Score;
