/// Configuration-layer errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid analytics config: {reason}")]
    InvalidToml { reason: String },

    #[error("factor weights must sum to 1.0, got {sum:.3}")]
    WeightSum { sum: f64 },
}
