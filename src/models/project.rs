//! Eco-project model.

use serde::{Deserialize, Serialize};

/// Default steps attached to projects created without explicit instructions.
pub const PLACEHOLDER_INSTRUCTIONS: [&str; 3] =
    ["Step 1: Plan", "Step 2: Execute", "Step 3: Review"];

/// Default materials attached to projects created without an explicit list.
pub const PLACEHOLDER_MATERIALS: [&str; 3] = ["Pen", "Paper", "Determination"];

/// Difficulty level of a project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProjectDifficulty {
    Easy,
    Medium,
    Hard,
}

impl ProjectDifficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectDifficulty::Easy => "Easy",
            ProjectDifficulty::Medium => "Medium",
            ProjectDifficulty::Hard => "Hard",
        }
    }
}

/// A hands-on eco-project students can join.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub difficulty: ProjectDifficulty,
    pub impact: String,
    pub instructions: Vec<String>,
    pub materials: Vec<String>,
    /// Informational only. Joining a project does not change it.
    pub participants: u32,
}

/// Request body for creating a new project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub difficulty: ProjectDifficulty,
    pub impact: String,
    #[serde(default)]
    pub instructions: Option<Vec<String>>,
    #[serde(default)]
    pub materials: Option<Vec<String>>,
}

impl NewProject {
    /// Build the stored project. Newly added projects always start with zero participants.
    pub fn into_project(self, id: String) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            duration: self.duration,
            difficulty: self.difficulty,
            impact: self.impact,
            instructions: self
                .instructions
                .unwrap_or_else(|| to_owned_list(&PLACEHOLDER_INSTRUCTIONS)),
            materials: self
                .materials
                .unwrap_or_else(|| to_owned_list(&PLACEHOLDER_MATERIALS)),
            participants: 0,
        }
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
