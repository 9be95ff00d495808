//! Read-only view endpoints.

use axum::extract::State;

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{AdminOverview, DashboardSummary, Navigation, StoreSnapshot};
use crate::AppState;

/// GET /api/store - Get the full store snapshot.
pub async fn get_store(State(state): State<AppState>) -> ApiResult<StoreSnapshot> {
    let snapshot = state.store.read().await.snapshot();
    let revision_id = snapshot.revision_id;
    success(snapshot, revision_id)
}

/// GET /api/dashboard - Get the current user's progress.
pub async fn get_dashboard(State(state): State<AppState>) -> ApiResult<DashboardSummary> {
    let store = state.store.read().await;

    match store.dashboard() {
        Some(summary) => success(summary, store.revision_id()),
        None => error(
            AppError::Unauthorized("Please log in to view your dashboard.".to_string()),
            store.revision_id(),
        ),
    }
}

/// GET /api/admin/overview - Get content counts.
pub async fn get_admin_overview(State(state): State<AppState>) -> ApiResult<AdminOverview> {
    let store = state.store.read().await;
    success(store.admin_overview(), store.revision_id())
}

/// GET /api/navigation - Get the layout links for the current user.
pub async fn get_navigation(State(state): State<AppState>) -> ApiResult<Navigation> {
    let store = state.store.read().await;
    success(store.navigation(), store.revision_id())
}
