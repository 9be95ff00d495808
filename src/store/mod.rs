//! In-memory application state.
//!
//! `Store` is the single source of truth for the current user, the three
//! content collections and the two progress sets. It is owned by the
//! application state and shared behind a lock; clients only change it through
//! the operations below.

mod notify;
mod seed;
mod session;
mod views;

pub use notify::*;

use std::sync::Arc;

use chrono::Utc;

use crate::models::{
    Lesson, NewLesson, NewProject, NewResource, Notification, Project, Resource, StoreSnapshot,
    User,
};

/// Generate a fresh entity id.
fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// The application state container.
pub struct Store {
    user: Option<User>,
    lessons: Vec<Lesson>,
    projects: Vec<Project>,
    resources: Vec<Resource>,
    completed_lessons: Vec<String>,
    joined_projects: Vec<String>,
    revision_id: i64,
    generated_at: String,
    sink: Arc<dyn NotificationSink>,
}

impl Store {
    /// Create an empty store with no user and no content.
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            user: None,
            lessons: Vec::new(),
            projects: Vec::new(),
            resources: Vec::new(),
            completed_lessons: Vec::new(),
            joined_projects: Vec::new(),
            revision_id: 0,
            generated_at: Utc::now().to_rfc3339(),
            sink,
        }
    }

    /// Create a store preloaded with the starter lessons, projects and resources.
    pub fn seeded(sink: Arc<dyn NotificationSink>) -> Self {
        let mut store = Self::new(sink);
        store.lessons = seed::lessons();
        store.projects = seed::projects();
        store.resources = seed::resources();
        store
    }

    /// Record that state changed.
    fn touch(&mut self) {
        self.revision_id += 1;
        self.generated_at = Utc::now().to_rfc3339();
    }

    fn notify(&self, notification: Notification) {
        self.sink.notify(notification);
    }

    pub fn revision_id(&self) -> i64 {
        self.revision_id
    }

    /// Capture the full read-only view of the store.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            revision_id: self.revision_id,
            generated_at: self.generated_at.clone(),
            user: self.user.clone(),
            lessons: self.lessons.clone(),
            projects: self.projects.clone(),
            resources: self.resources.clone(),
            completed_lessons: self.completed_lessons.clone(),
            joined_projects: self.joined_projects.clone(),
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn completed_lessons(&self) -> &[String] {
        &self.completed_lessons
    }

    pub fn joined_projects(&self) -> &[String] {
        &self.joined_projects
    }

    pub fn lesson(&self, id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == id)
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn resource(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    pub fn is_lesson_completed(&self, id: &str) -> bool {
        self.completed_lessons.iter().any(|c| c == id)
    }

    pub fn has_joined_project(&self, id: &str) -> bool {
        self.joined_projects.iter().any(|j| j == id)
    }

    // ==================== LESSON OPERATIONS ====================

    /// Append a lesson under a fresh id.
    pub fn add_lesson(&mut self, lesson: NewLesson) -> Lesson {
        let lesson = lesson.into_lesson(new_id());
        tracing::info!(
            id = %lesson.id,
            difficulty = lesson.difficulty.as_str(),
            "Adding lesson"
        );
        self.lessons.push(lesson.clone());
        self.touch();
        self.notify(Notification::new("Lesson Added").with_description(&lesson.title));
        lesson
    }

    /// Remove a lesson. Unknown ids are ignored. Progress sets are left untouched.
    pub fn remove_lesson(&mut self, id: &str) -> bool {
        let before = self.lessons.len();
        self.lessons.retain(|l| l.id != id);
        let removed = self.lessons.len() != before;
        if removed {
            tracing::info!(id, "Removed lesson");
            self.touch();
        } else {
            tracing::debug!(id, "Lesson not present, nothing removed");
        }
        self.notify(Notification::new("Lesson Removed").destructive());
        removed
    }

    // ==================== PROJECT OPERATIONS ====================

    /// Append a project under a fresh id. New projects start with zero participants.
    pub fn add_project(&mut self, project: NewProject) -> Project {
        let project = project.into_project(new_id());
        tracing::info!(
            id = %project.id,
            difficulty = project.difficulty.as_str(),
            "Adding project"
        );
        self.projects.push(project.clone());
        self.touch();
        self.notify(Notification::new("Project Added").with_description(&project.title));
        project
    }

    /// Remove a project. Unknown ids are ignored. Progress sets are left untouched.
    pub fn remove_project(&mut self, id: &str) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        let removed = self.projects.len() != before;
        if removed {
            tracing::info!(id, "Removed project");
            self.touch();
        } else {
            tracing::debug!(id, "Project not present, nothing removed");
        }
        self.notify(Notification::new("Project Removed").destructive());
        removed
    }

    // ==================== RESOURCE OPERATIONS ====================

    /// Append a resource under a fresh id.
    pub fn add_resource(&mut self, resource: NewResource) -> Resource {
        let resource = resource.into_resource(new_id());
        tracing::info!(id = %resource.id, kind = resource.kind.as_str(), "Adding resource");
        self.resources.push(resource.clone());
        self.touch();
        self.notify(Notification::new("Resource Added").with_description(&resource.title));
        resource
    }

    /// Remove a resource. Unknown ids are ignored.
    pub fn remove_resource(&mut self, id: &str) -> bool {
        let before = self.resources.len();
        self.resources.retain(|r| r.id != id);
        let removed = self.resources.len() != before;
        if removed {
            tracing::info!(id, "Removed resource");
            self.touch();
        } else {
            tracing::debug!(id, "Resource not present, nothing removed");
        }
        self.notify(Notification::new("Resource Removed").destructive());
        removed
    }

    // ==================== PROGRESS OPERATIONS ====================

    /// Mark a lesson complete. The id is not checked against the lesson
    /// collection. Returns true only the first time an id is recorded.
    pub fn mark_lesson_complete(&mut self, id: &str) -> bool {
        if self.is_lesson_completed(id) {
            tracing::debug!(id, "Lesson already completed");
            return false;
        }
        self.completed_lessons.push(id.to_string());
        if self.lesson(id).is_none() {
            tracing::warn!(id, "Completed lesson id does not match a live lesson");
        }
        self.touch();
        self.notify(Notification::new("Lesson Completed!").with_description("+50 Eco Points"));
        true
    }

    /// Join a project. The id is not checked against the project collection
    /// and the project's participant count is not changed.
    pub fn join_project(&mut self, id: &str) -> bool {
        if self.has_joined_project(id) {
            tracing::debug!(id, "Project already joined");
            return false;
        }
        self.joined_projects.push(id.to_string());
        if self.project(id).is_none() {
            tracing::warn!(id, "Joined project id does not match a live project");
        }
        self.touch();
        self.notify(Notification::new("Project Joined!").with_description("Let's make an impact."));
        true
    }
}
