//! Lesson API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use super::{error, success, success_with, ApiResult, ProgressUpdate, RemovalResult};
use crate::errors::AppError;
use crate::models::{Lesson, NewLesson};
use crate::AppState;

/// GET /api/lessons - List all lessons in insertion order.
pub async fn list_lessons(State(state): State<AppState>) -> ApiResult<Vec<Lesson>> {
    let store = state.store.read().await;
    success(store.lessons().to_vec(), store.revision_id())
}

/// GET /api/lessons/:id - Get a single lesson.
pub async fn get_lesson(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Lesson> {
    let store = state.store.read().await;

    match store.lesson(&id) {
        Some(lesson) => success(lesson.clone(), store.revision_id()),
        None => error(
            AppError::NotFound(format!("Lesson {} not found", id)),
            store.revision_id(),
        ),
    }
}

/// POST /api/lessons - Add a lesson.
pub async fn create_lesson(
    State(state): State<AppState>,
    payload: Result<Json<NewLesson>, JsonRejection>,
) -> ApiResult<Lesson> {
    let mut store = state.store.write().await;
    let revision_id = store.revision_id();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return error(rejection.into(), revision_id),
    };
    if let Err(e) = request.validate() {
        return error(e, revision_id);
    }

    let lesson = store.add_lesson(request);
    success_with(lesson, store.revision_id(), state.notifications.drain())
}

/// DELETE /api/lessons/:id - Remove a lesson. Unknown ids are a no-op.
pub async fn delete_lesson(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<RemovalResult> {
    let mut store = state.store.write().await;
    let removed = store.remove_lesson(&id);

    success_with(
        RemovalResult { id, removed },
        store.revision_id(),
        state.notifications.drain(),
    )
}

/// POST /api/lessons/:id/complete - Mark a lesson complete.
pub async fn complete_lesson(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ProgressUpdate> {
    let mut store = state.store.write().await;
    let newly_added = store.mark_lesson_complete(&id);

    success_with(
        ProgressUpdate {
            id,
            newly_added,
            ids: store.completed_lessons().to_vec(),
        },
        store.revision_id(),
        state.notifications.drain(),
    )
}
