use serde::{Deserialize, Serialize};

/// A prioritized next action for a goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickAction {
    pub label: String,
    /// Action id understood by the presentation layer, e.g. `open-check-in`.
    pub action: String,
    pub icon: String,
    pub variant: ActionVariant,
    /// Higher runs first; ties keep evaluation order.
    pub priority: u8,
}

/// Visual emphasis for a quick action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionVariant {
    Default,
    Warning,
    Danger,
}
