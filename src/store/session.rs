//! Login and logout.
//!
//! Identity is synthesized, not looked up: every login produces the same
//! sample profile, named by role. Credential checks happen before `login`
//! is called (see `auth`).

use super::Store;
use crate::models::{Notification, User, UserRole, UserStats};

const SYNTHETIC_USER_ID: &str = "u1";
const SAMPLE_AVATAR: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=Felix";
const SAMPLE_BADGES: [&str; 2] = ["Eco-Starter", "Water Saver"];

/// Build the sample profile for a freshly logged in user.
fn synthetic_user(username: &str, role: UserRole) -> User {
    let name = match role {
        UserRole::Admin => "Admin User",
        UserRole::Guest | UserRole::Student => "Alex Green",
    };

    User {
        id: SYNTHETIC_USER_ID.to_string(),
        name: name.to_string(),
        username: username.to_string(),
        role,
        avatar: Some(SAMPLE_AVATAR.to_string()),
        stats: UserStats {
            projects_started: 2,
            lessons_completed: 5,
            eco_points: 350,
        },
        badges: SAMPLE_BADGES.iter().map(|b| b.to_string()).collect(),
    }
}

impl Store {
    /// Replace the current user with a new one. Always succeeds.
    pub fn login(&mut self, username: &str, role: UserRole) -> &User {
        if let Some(previous) = &self.user {
            tracing::debug!(previous = %previous.username, "Replacing current user");
        }
        tracing::info!(username, role = role.as_str(), "User logged in");

        self.touch();
        self.notify(
            Notification::new(format!("Welcome back, {}!", username))
                .with_description(format!("Logged in as {}.", role)),
        );
        self.user.insert(synthetic_user(username, role))
    }

    /// Clear the current user. Progress sets survive logout.
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(username = %user.username, "User logged out");
            self.touch();
        }
        self.notify(Notification::new("Logged out").with_description("See you next time!"));
    }
}
