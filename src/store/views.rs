//! Derived read-only views over the store.

use super::Store;
use crate::models::{AdminOverview, DashboardSummary, NavLink, Navigation};

impl Store {
    /// Progress summary for the current user, or `None` when nobody is logged in.
    pub fn dashboard(&self) -> Option<DashboardSummary> {
        let user = self.user.clone()?;

        let completed_count = self.completed_lessons.len();
        let total_lessons = self.lessons.len();
        let progress_percent = completed_count as f64 / total_lessons.max(1) as f64 * 100.0;

        let next_lesson = self
            .lessons
            .iter()
            .find(|l| !self.is_lesson_completed(&l.id))
            .cloned();

        // Dangling ids resolve to nothing.
        let joined_projects = self
            .joined_projects
            .iter()
            .filter_map(|id| self.project(id).cloned())
            .collect();

        Some(DashboardSummary {
            user,
            completed_count,
            total_lessons,
            progress_percent,
            next_lesson,
            joined_projects,
        })
    }

    pub fn admin_overview(&self) -> AdminOverview {
        AdminOverview {
            lesson_count: self.lessons.len(),
            project_count: self.projects.len(),
            resource_count: self.resources.len(),
        }
    }

    /// Links for the layout shell, branched on presence and role of the user.
    pub fn navigation(&self) -> Navigation {
        let links = vec![
            NavLink::new("/", "Home"),
            NavLink::new("/lessons", "Lessons"),
            NavLink::new("/projects", "Projects"),
            NavLink::new("/resources", "Resources"),
        ];

        match &self.user {
            Some(user) => Navigation {
                links,
                account: NavLink::new(user.role.landing_path(), "Dashboard"),
                role_label: Some(user.role.display_label().to_string()),
            },
            None => Navigation {
                links,
                account: NavLink::new("/auth", "Log in"),
                role_label: None,
            },
        }
    }
}
