//! Analytics configuration: aggregation weights and classification
//! thresholds, tunable without touching calculation logic.

pub mod analytics_config;
pub mod defaults;

pub use analytics_config::{
    AnalyticsConfig, AttentionThresholds, FactorWeights, StatusThresholds,
};
