//! REST API module.
//!
//! The HTTP surface is the view layer: it validates forms, checks login
//! credentials, calls store operations and returns the resulting data together
//! with any notifications the operation emitted.

mod lessons;
mod projects;
mod resources;
mod session;
mod views;

pub use lessons::*;
pub use projects::*;
pub use resources::*;
pub use session::*;
pub use views::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::{AppError, AppErrorWithRevision};
use crate::models::Notification;

/// Success response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    pub revision_id: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notifications: Vec<Notification>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T, revision_id: i64) -> Self {
        Self {
            success: true,
            data,
            revision_id,
            notifications: Vec::new(),
        }
    }

    pub fn with_notifications(mut self, notifications: Vec<Notification>) -> Self {
        self.notifications = notifications;
        self
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, AppErrorWithRevision>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T, revision_id: i64) -> ApiResult<T> {
    Ok(ApiResponse::new(data, revision_id))
}

/// Create a successful API response carrying emitted notifications.
pub fn success_with<T: Serialize>(
    data: T,
    revision_id: i64,
    notifications: Vec<Notification>,
) -> ApiResult<T> {
    Ok(ApiResponse::new(data, revision_id).with_notifications(notifications))
}

/// Create an error API response.
pub fn error<T: Serialize>(err: AppError, revision_id: i64) -> ApiResult<T> {
    Err(with_revision(err, revision_id))
}

fn with_revision(error: AppError, revision_id: i64) -> AppErrorWithRevision {
    AppErrorWithRevision {
        error,
        revision_id,
        notifications: Vec::new(),
    }
}

/// Result of a delete request. Unknown ids are not an error.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovalResult {
    pub id: String,
    pub removed: bool,
}

/// Result of a complete or join request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    pub id: String,
    /// False when the id was already recorded.
    pub newly_added: bool,
    /// The full progress set after the update.
    pub ids: Vec<String>,
}
