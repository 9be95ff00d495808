//! Resource API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use super::{error, success, success_with, ApiResult, RemovalResult};
use crate::errors::AppError;
use crate::models::{NewResource, Resource};
use crate::AppState;

/// GET /api/resources - List all resources.
pub async fn list_resources(State(state): State<AppState>) -> ApiResult<Vec<Resource>> {
    let store = state.store.read().await;
    success(store.resources().to_vec(), store.revision_id())
}

/// GET /api/resources/:id - Get a single resource.
pub async fn get_resource(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Resource> {
    let store = state.store.read().await;

    match store.resource(&id) {
        Some(resource) => success(resource.clone(), store.revision_id()),
        None => error(
            AppError::NotFound(format!("Resource {} not found", id)),
            store.revision_id(),
        ),
    }
}

/// POST /api/resources - Add a resource.
pub async fn create_resource(
    State(state): State<AppState>,
    payload: Result<Json<NewResource>, JsonRejection>,
) -> ApiResult<Resource> {
    let mut store = state.store.write().await;
    let revision_id = store.revision_id();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return error(rejection.into(), revision_id),
    };
    if let Err(e) = request.validate() {
        return error(e, revision_id);
    }

    let resource = store.add_resource(request);
    success_with(resource, store.revision_id(), state.notifications.drain())
}

/// DELETE /api/resources/:id - Remove a resource. Unknown ids are a no-op.
pub async fn delete_resource(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<RemovalResult> {
    let mut store = state.store.write().await;
    let removed = store.remove_resource(&id);

    success_with(
        RemovalResult { id, removed },
        store.revision_id(),
        state.notifications.drain(),
    )
}
