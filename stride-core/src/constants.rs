/// Stride system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default self-reported confidence (0–10 scale) when a goal has none.
pub const DEFAULT_CONFIDENCE_SCORE: u8 = 7;

/// Default total goal duration in days when no horizon hint is present.
pub const DEFAULT_TOTAL_DAYS: i64 = 30;

/// Check-ins required before the consistency bonus applies.
pub const CONSISTENCY_MIN_CHECK_INS: usize = 3;

/// Days after which the latest check-in counts as stale.
pub const STALE_CHECK_IN_DAYS: i64 = 14;

/// Days after which a stale check-in escalates from info to warning.
pub const VERY_STALE_CHECK_IN_DAYS: i64 = 21;

/// Days an active high or critical risk may sit unmitigated before escalation.
pub const RISK_ESCALATION_DAYS: i64 = 7;

/// Window in days within which a key result counts as due soon.
pub const KEY_RESULT_DUE_SOON_DAYS: i64 = 7;

/// Probability at or above which a goal is on a success trajectory.
pub const HIGH_PROBABILITY: u8 = 80;

/// Probability below which a goal is considered at risk.
pub const LOW_PROBABILITY: u8 = 50;

/// Maximum number of quick actions surfaced at once.
pub const MAX_QUICK_ACTIONS: usize = 3;
