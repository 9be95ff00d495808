//! Project API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use super::{error, success, success_with, ApiResult, ProgressUpdate, RemovalResult};
use crate::errors::AppError;
use crate::models::{NewProject, Project};
use crate::AppState;

/// GET /api/projects - List all projects.
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Vec<Project>> {
    let store = state.store.read().await;
    success(store.projects().to_vec(), store.revision_id())
}

/// GET /api/projects/:id - Get a single project.
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Project> {
    let store = state.store.read().await;

    match store.project(&id) {
        Some(project) => success(project.clone(), store.revision_id()),
        None => error(
            AppError::NotFound(format!("Project {} not found", id)),
            store.revision_id(),
        ),
    }
}

/// POST /api/projects - Add a project.
///
/// Omitted instructions and materials fall back to placeholder lists.
pub async fn create_project(
    State(state): State<AppState>,
    payload: Result<Json<NewProject>, JsonRejection>,
) -> ApiResult<Project> {
    let mut store = state.store.write().await;
    let revision_id = store.revision_id();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return error(rejection.into(), revision_id),
    };
    if let Err(e) = request.validate() {
        return error(e, revision_id);
    }

    let project = store.add_project(request);
    success_with(project, store.revision_id(), state.notifications.drain())
}

/// DELETE /api/projects/:id - Remove a project. Unknown ids are a no-op.
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<RemovalResult> {
    let mut store = state.store.write().await;
    let removed = store.remove_project(&id);

    success_with(
        RemovalResult { id, removed },
        store.revision_id(),
        state.notifications.drain(),
    )
}

/// POST /api/projects/:id/join - Join a project.
pub async fn join_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ProgressUpdate> {
    let mut store = state.store.write().await;
    let newly_added = store.join_project(&id);

    success_with(
        ProgressUpdate {
            id,
            newly_added,
            ids: store.joined_projects().to_vec(),
        },
        store.revision_id(),
        state.notifications.drain(),
    )
}
