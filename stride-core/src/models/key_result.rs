use serde::{Deserialize, Serialize};

/// A measurable sub-target contributing to overall goal progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyResult {
    pub description: String,
    /// Completion of this key result, 0–100.
    pub progress: u8,
    pub due_date: String,
}

impl KeyResult {
    /// True while the key result still has work remaining.
    pub fn is_incomplete(&self) -> bool {
        self.progress < 100
    }
}

/// A binary milestone on the goal timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
    pub completed: bool,
}
