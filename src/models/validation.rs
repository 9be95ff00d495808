//! Form-level validation for content submitted by admins.
//!
//! The store accepts whatever it is given; these checks run in the HTTP layer
//! before an entity reaches it.

use url::Url;

use super::{NewLesson, NewProject, NewResource};
use crate::errors::AppError;

/// Require at least `min` characters.
fn min_chars(value: &str, min: usize, message: &str) -> Result<(), AppError> {
    if value.chars().count() < min {
        return Err(AppError::Validation(message.to_string()));
    }
    Ok(())
}

/// Require a non-empty value. Whitespace counts.
fn required(value: &str, message: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::Validation(message.to_string()));
    }
    Ok(())
}

impl NewLesson {
    pub fn validate(&self) -> Result<(), AppError> {
        min_chars(&self.title, 2, "Title is required")?;
        min_chars(&self.description, 10, "Description is required")?;
        required(&self.category, "Category is required")?;
        required(&self.duration, "Duration is required")?;
        min_chars(&self.content, 20, "Content is required")?;
        Ok(())
    }
}

impl NewProject {
    pub fn validate(&self) -> Result<(), AppError> {
        min_chars(&self.title, 2, "Title is required")?;
        min_chars(&self.description, 10, "Description is required")?;
        required(&self.duration, "Duration is required")?;
        required(&self.impact, "Impact statement is required")?;
        Ok(())
    }
}

impl NewResource {
    pub fn validate(&self) -> Result<(), AppError> {
        min_chars(&self.title, 2, "Title is required")?;
        min_chars(&self.description, 10, "Description is required")?;
        if Url::parse(&self.url).is_err() {
            return Err(AppError::Validation("Must be a valid URL".to_string()));
        }
        required(&self.tag, "Tag is required")?;
        Ok(())
    }
}

/// Login form rules shared by every role.
pub fn validate_credentials(username: &str, password: &str) -> Result<(), AppError> {
    min_chars(username, 2, "Username must be at least 2 characters.")?;
    min_chars(password, 4, "Password must be at least 4 characters.")?;
    Ok(())
}
