use stride_core::{Goal, RiskSeverity, Score};

/// Severity weights. This is the one inverted factor: higher is worse, and
/// the aggregator scores `100 − riskSeverity`.
const SEVERITY_LOW: f64 = 15.0;
const SEVERITY_MEDIUM: f64 = 40.0;
const SEVERITY_HIGH: f64 = 75.0;
const SEVERITY_CRITICAL: f64 = 100.0;

/// Numeric weight for a single severity level.
pub fn severity_weight(severity: RiskSeverity) -> f64 {
    match severity {
        RiskSeverity::Low => SEVERITY_LOW,
        RiskSeverity::Medium => SEVERITY_MEDIUM,
        RiskSeverity::High => SEVERITY_HIGH,
        RiskSeverity::Critical => SEVERITY_CRITICAL,
    }
}

/// Mean severity across active risks only. Mitigating and resolved risks
/// no longer count; a goal with no active risks scores 0.
pub fn calculate(goal: &Goal) -> Score {
    let mut sum = 0.0;
    let mut count = 0usize;
    for risk in goal.risks.iter().filter(|r| r.is_active()) {
        sum += severity_weight(risk.severity);
        count += 1;
    }
    if count == 0 {
        return Score::new(0.0);
    }
    Score::new(sum / count as f64)
}
