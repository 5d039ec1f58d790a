//! # stride-core
//!
//! Foundation crate for the Stride goal analytics system.
//! Defines all domain types, result models, config, constants, and errors.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::AnalyticsConfig;
pub use errors::ConfigError;
pub use models::{
    ActionVariant, CheckIn, Collaborator, CollaboratorRole, Goal, GoalHealthIndicators,
    HealthFactors, HealthStatus, KeyResult, Milestone, Mood, QuickAction, RecommendationKind, Risk,
    RiskSeverity, RiskStatus, Score, Severity, SmartRecommendation, SuccessLikelihood, TimeHorizon,
};
