//! Read-only views of the store handed to clients.

use serde::{Deserialize, Serialize};

use super::{Lesson, Project, Resource, User};

/// Everything a view needs to render, captured at one revision.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub revision_id: i64,
    pub generated_at: String,
    pub user: Option<User>,
    pub lessons: Vec<Lesson>,
    pub projects: Vec<Project>,
    pub resources: Vec<Resource>,
    pub completed_lessons: Vec<String>,
    pub joined_projects: Vec<String>,
}

/// Per-student progress shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub user: User,
    pub completed_count: usize,
    pub total_lessons: usize,
    /// Completed count over lesson count, as a percentage. Dangling completion
    /// ids are counted, so this can exceed 100 after lessons are removed.
    pub progress_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_lesson: Option<Lesson>,
    pub joined_projects: Vec<Project>,
}

/// Content counts shown on the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdminOverview {
    pub lesson_count: usize,
    pub project_count: usize,
    pub resource_count: usize,
}

/// A single navigation entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

impl NavLink {
    pub fn new(href: &str, label: &str) -> Self {
        Self {
            href: href.to_string(),
            label: label.to_string(),
        }
    }
}

/// Navigation for the layout shell, branched on the current user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub links: Vec<NavLink>,
    pub account: NavLink,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_label: Option<String>,
}
