//! Default configuration values. Single source of truth for every tunable.

/// Aggregation weight of the progress-velocity factor.
pub const DEFAULT_WEIGHT_PROGRESS_VELOCITY: f64 = 0.30;
/// Aggregation weight of the check-in-frequency factor.
pub const DEFAULT_WEIGHT_CHECK_IN_FREQUENCY: f64 = 0.15;
/// Aggregation weight of the (inverted) risk-severity factor.
pub const DEFAULT_WEIGHT_RISK_SEVERITY: f64 = 0.25;
/// Aggregation weight of the confidence-trend factor.
pub const DEFAULT_WEIGHT_CONFIDENCE_TREND: f64 = 0.15;
/// Aggregation weight of the milestone-completion factor.
pub const DEFAULT_WEIGHT_MILESTONE_COMPLETION: f64 = 0.15;

/// Velocity score below which the factor is flagged.
pub const DEFAULT_ATTENTION_VELOCITY: f64 = 50.0;
/// Check-in frequency score below which the factor is flagged.
pub const DEFAULT_ATTENTION_CHECK_IN: f64 = 60.0;
/// Risk severity score above which the factor is flagged.
pub const DEFAULT_ATTENTION_RISK: f64 = 50.0;
/// Confidence trend score below which the factor is flagged. The exact
/// cutoff is a judgment call, which is why it is config rather than code.
pub const DEFAULT_ATTENTION_CONFIDENCE: f64 = 50.0;
/// Milestone completion score below which the factor is flagged.
pub const DEFAULT_ATTENTION_MILESTONE: f64 = 50.0;

/// Health score at or above which a goal is healthy.
pub const DEFAULT_HEALTHY_THRESHOLD: u8 = 75;
/// Health score at or above which a goal merely needs attention.
pub const DEFAULT_NEEDS_ATTENTION_THRESHOLD: u8 = 50;

/// Tolerance when validating that factor weights sum to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;
