use stride_core::{Goal, Score};

/// Share of completed milestones.
///
/// A goal with no milestones is not penalized for their absence and scores
/// full.
pub fn calculate(goal: &Goal) -> Score {
    if goal.milestones.is_empty() {
        return Score::new(Score::MAX);
    }
    let completed = goal.milestones.iter().filter(|m| m.completed).count();
    Score::new(completed as f64 / goal.milestones.len() as f64 * 100.0)
}
