use serde::{Deserialize, Serialize};

/// A person attached to a goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collaborator {
    pub name: String,
    pub role: CollaboratorRole,
}

/// Collaborator roles. Champions are associated with higher historical
/// completion rates and feed the recommendation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollaboratorRole {
    Creator,
    Admin,
    Collaborator,
    Viewer,
    Champion,
}
