use serde::{Deserialize, Serialize};

use super::collaborator::Collaborator;
use super::key_result::{KeyResult, Milestone};
use super::risk::Risk;

/// Read-only snapshot of a tracked goal.
///
/// The analytics core never mutates a `Goal`; callers own the lifecycle and
/// re-invoke the calculators whenever they want a fresh assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub title: String,
    /// Overall progress, 0–100. Out-of-range input is clamped at use.
    pub progress: u8,
    /// Deadline as a date string; unparseable deadlines degrade to "past".
    pub deadline: String,
    /// Coarse duration hint used when no check-in history exists.
    pub time_horizon: Option<TimeHorizon>,
    /// Check-in history, most recent first.
    pub check_ins: Vec<CheckIn>,
    pub risks: Vec<Risk>,
    pub key_results: Vec<KeyResult>,
    pub milestones: Vec<Milestone>,
    pub collaborators: Vec<Collaborator>,
    /// Self-reported confidence on a 0–10 scale.
    pub confidence_score: Option<u8>,
}

impl Goal {
    /// Progress clamped to the legal 0–100 range.
    pub fn progress_clamped(&self) -> u8 {
        self.progress.min(100)
    }

    /// The most recent check-in, if any.
    pub fn latest_check_in(&self) -> Option<&CheckIn> {
        self.check_ins.first()
    }

    /// True when any collaborator holds the champion role.
    pub fn has_champion(&self) -> bool {
        self.collaborators
            .iter()
            .any(|c| c.role == super::collaborator::CollaboratorRole::Champion)
    }
}

/// Coarse hint for a goal's total duration when history is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeHorizon {
    Short,
    Medium,
    Long,
    /// Explicit duration in days.
    Days(u32),
}

/// A single progress check-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckIn {
    /// Relative phrase ("3 days ago", "just now") or absolute date.
    pub date: String,
    /// Progress reported at this check-in, 0–100.
    pub progress: u8,
    pub mood: Mood,
}

/// Reported mood attached to a check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Positive,
    Neutral,
    Concerned,
}
