//! User model and the closed set of roles.

use serde::{Deserialize, Serialize};

/// Role of the current user. Governs which page set a client may reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Guest,
    Student,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Guest => "guest",
            UserRole::Student => "student",
            UserRole::Admin => "admin",
        }
    }

    /// Where a client lands right after logging in with this role.
    pub fn landing_path(&self) -> &'static str {
        match self {
            UserRole::Admin => "/admin",
            UserRole::Guest | UserRole::Student => "/dashboard",
        }
    }

    /// Label shown next to the user's name in the layout shell.
    pub fn display_label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Administrator",
            UserRole::Guest | UserRole::Student => "Student",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate statistics displayed on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub projects_started: u32,
    pub lessons_completed: u32,
    pub eco_points: i64,
}

/// The authenticated user. At most one exists per store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub username: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub stats: UserStats,
    /// Earned badge names. Duplicates are not prevented.
    pub badges: Vec<String>,
}
