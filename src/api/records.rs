//! Read endpoints for the two records and the site-wide dark-mode toggle.

use std::sync::Arc;

use axum::extract::State;

use super::{error, success, ApiResult};
use crate::db::RevisionInfo;
use crate::models::{AdminSettings, SiteContent};
use crate::AppState;

/// GET /api/content - The committed content record.
pub async fn get_content(State(state): State<AppState>) -> ApiResult<Arc<SiteContent>> {
    let revision_id = state.store.revision_id().await.unwrap_or(0);
    success(state.store.content(), revision_id)
}

/// GET /api/settings - The committed settings record.
pub async fn get_settings(State(state): State<AppState>) -> ApiResult<Arc<AdminSettings>> {
    let revision_id = state.store.revision_id().await.unwrap_or(0);
    success(state.store.settings(), revision_id)
}

/// GET /api/revision - Get the current revision info.
pub async fn get_revision(State(state): State<AppState>) -> ApiResult<RevisionInfo> {
    let revision_info = state
        .store
        .repository()
        .get_revision_info()
        .await
        .map_err(|e| crate::errors::AppErrorWithRevision {
            error: e,
            revision_id: 0,
        })?;

    success(revision_info.clone(), revision_info.revision_id)
}

/// POST /api/settings/dark-mode - Flip dark mode and commit settings.
pub async fn toggle_dark_mode(State(state): State<AppState>) -> ApiResult<Arc<AdminSettings>> {
    match state.store.toggle_dark_mode().await {
        Ok(committed) => success(committed.record, committed.revision_id),
        Err(e) => error(e, state.store.revision_id().await.unwrap_or(0)),
    }
}
