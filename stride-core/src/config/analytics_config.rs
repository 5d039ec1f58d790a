use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Analytics subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub weights: FactorWeights,
    pub attention: AttentionThresholds,
    pub status: StatusThresholds,
}

/// Aggregation weights for the five health factors. Must sum to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorWeights {
    pub progress_velocity: f64,
    pub check_in_frequency: f64,
    pub risk_severity: f64,
    pub confidence_trend: f64,
    pub milestone_completion: f64,
}

/// Per-factor thresholds that produce `needs_attention` flags.
///
/// All are "flag below" cutoffs except `risk`, which flags above (risk
/// severity is the inverted factor).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AttentionThresholds {
    pub velocity: f64,
    pub check_in: f64,
    pub risk: f64,
    pub confidence: f64,
    pub milestone: f64,
}

/// Health-score cutoffs for the overall status classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusThresholds {
    pub healthy: u8,
    pub needs_attention: u8,
}

impl AnalyticsConfig {
    /// Parse a config from TOML, validating weight consistency.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input).map_err(|e| ConfigError::InvalidToml {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the factor weights form a proper convex combination.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sum = self.weights.sum();
        if (sum - 1.0).abs() > defaults::WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::WeightSum { sum });
        }
        Ok(())
    }
}

impl FactorWeights {
    /// Sum of all five weights.
    pub fn sum(&self) -> f64 {
        self.progress_velocity
            + self.check_in_frequency
            + self.risk_severity
            + self.confidence_trend
            + self.milestone_completion
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            weights: FactorWeights::default(),
            attention: AttentionThresholds::default(),
            status: StatusThresholds::default(),
        }
    }
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            progress_velocity: defaults::DEFAULT_WEIGHT_PROGRESS_VELOCITY,
            check_in_frequency: defaults::DEFAULT_WEIGHT_CHECK_IN_FREQUENCY,
            risk_severity: defaults::DEFAULT_WEIGHT_RISK_SEVERITY,
            confidence_trend: defaults::DEFAULT_WEIGHT_CONFIDENCE_TREND,
            milestone_completion: defaults::DEFAULT_WEIGHT_MILESTONE_COMPLETION,
        }
    }
}

impl Default for AttentionThresholds {
    fn default() -> Self {
        Self {
            velocity: defaults::DEFAULT_ATTENTION_VELOCITY,
            check_in: defaults::DEFAULT_ATTENTION_CHECK_IN,
            risk: defaults::DEFAULT_ATTENTION_RISK,
            confidence: defaults::DEFAULT_ATTENTION_CONFIDENCE,
            milestone: defaults::DEFAULT_ATTENTION_MILESTONE,
        }
    }
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            healthy: defaults::DEFAULT_HEALTHY_THRESHOLD,
            needs_attention: defaults::DEFAULT_NEEDS_ATTENTION_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        let config = AnalyticsConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.weights.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn parses_partial_toml_with_defaults() {
        let config = AnalyticsConfig::from_toml_str(
            r#"
            [attention]
            confidence = 30.0
            "#,
        )
        .unwrap();
        assert_eq!(config.attention.confidence, 30.0);
        // Untouched sections keep their defaults.
        assert_eq!(config.status.healthy, 75);
        assert_eq!(config.weights.progress_velocity, 0.30);
    }

    #[test]
    fn rejects_weights_that_do_not_sum_to_one() {
        let err = AnalyticsConfig::from_toml_str(
            r#"
            [weights]
            progress_velocity = 0.9
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, crate::errors::ConfigError::WeightSum { .. }));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = AnalyticsConfig::from_toml_str("weights = not-a-table").unwrap_err();
        assert!(matches!(
            err,
            crate::errors::ConfigError::InvalidToml { .. }
        ));
    }
}
