//! Session API endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::{error, success, success_with, ApiResult};
use crate::auth::rejection_notification;
use crate::errors::{AppError, AppErrorWithRevision};
use crate::models::{User, UserRole};
use crate::store::NotificationSink;
use crate::AppState;

fn default_role() -> UserRole {
    UserRole::Student
}

/// Request body for logging in.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub role: UserRole,
}

/// Response body for a successful login.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: User,
    /// Where the client should navigate next.
    pub redirect_to: String,
}

/// GET /api/session - Get the current user, or null.
pub async fn get_session(State(state): State<AppState>) -> ApiResult<Option<User>> {
    let store = state.store.read().await;
    success(store.user().cloned(), store.revision_id())
}

/// POST /api/session/login - Check credentials and log in.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<LoginResponse> {
    let mut store = state.store.write().await;
    let revision_id = store.revision_id();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return error(rejection.into(), revision_id),
    };

    if let Err(e) = state
        .session
        .authenticate(&request.username, &request.password, request.role)
    {
        // Form-rule failures are reported inline, only credential mismatches notify.
        if matches!(e, AppError::Unauthorized(_)) {
            state.notifications.notify(rejection_notification());
        }
        return Err(AppErrorWithRevision {
            error: e,
            revision_id,
            notifications: state.notifications.drain(),
        });
    }

    let user = store.login(&request.username, request.role).clone();
    let redirect_to = user.role.landing_path().to_string();
    success_with(
        LoginResponse { user, redirect_to },
        store.revision_id(),
        state.notifications.drain(),
    )
}

/// POST /api/session/logout - Clear the current user.
pub async fn logout(State(state): State<AppState>) -> ApiResult<()> {
    let mut store = state.store.write().await;
    store.logout();
    success_with((), store.revision_id(), state.notifications.drain())
}
