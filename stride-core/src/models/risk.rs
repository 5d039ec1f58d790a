use serde::{Deserialize, Serialize};

/// A tracked risk against a goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Risk {
    pub title: String,
    pub status: RiskStatus,
    pub severity: RiskSeverity,
    /// When the risk was last touched; relative or absolute date string.
    pub updated_at: String,
}

impl Risk {
    /// True while the risk still contributes to the severity factor.
    pub fn is_active(&self) -> bool {
        self.status == RiskStatus::Active
    }

    /// True for severities that can trigger escalation alerts.
    pub fn is_high_severity(&self) -> bool {
        matches!(self.severity, RiskSeverity::High | RiskSeverity::Critical)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskStatus {
    Active,
    Mitigating,
    Resolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskSeverity {
    Low,
    Medium,
    High,
    Critical,
}
