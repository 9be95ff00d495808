//! Lesson model.

use serde::{Deserialize, Serialize};

/// Difficulty level of a lesson.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LessonDifficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl LessonDifficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            LessonDifficulty::Beginner => "Beginner",
            LessonDifficulty::Intermediate => "Intermediate",
            LessonDifficulty::Advanced => "Advanced",
        }
    }
}

/// A lesson students can read and mark complete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Free-text classification, e.g. "Renewable Energy".
    pub category: String,
    pub difficulty: LessonDifficulty,
    /// Free-text label, e.g. "10 min".
    pub duration: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Request body for creating a new lesson.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLesson {
    pub title: String,
    pub description: String,
    pub category: String,
    pub difficulty: LessonDifficulty,
    pub duration: String,
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl NewLesson {
    pub fn into_lesson(self, id: String) -> Lesson {
        Lesson {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            difficulty: self.difficulty,
            duration: self.duration,
            content: self.content,
            image: self.image,
        }
    }
}
