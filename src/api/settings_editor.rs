//! Theme settings editor endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use super::{success, with_revision, ApiResult, SaveAck};
use crate::editors::ThemePatch;
use crate::models::{AdminSettings, ThemeSettings};
use crate::AppState;

/// GET /api/admin/settings/draft
pub async fn get_settings_draft(State(state): State<AppState>) -> ApiResult<ThemeSettings> {
    let mut editor = state.editors.settings.lock().await;
    editor.sync(&state.store.settings());
    success(
        editor.theme().clone(),
        state.store.revision_id().await.unwrap_or(0),
    )
}

/// PUT /api/admin/settings/draft
pub async fn patch_settings_draft(
    State(state): State<AppState>,
    Json(patch): Json<ThemePatch>,
) -> ApiResult<ThemeSettings> {
    let mut editor = state.editors.settings.lock().await;
    editor.sync(&state.store.settings());
    let theme = match editor.patch(patch) {
        Ok(theme) => theme.clone(),
        Err(e) => return Err(with_revision(&state, e).await),
    };
    success(theme, state.store.revision_id().await.unwrap_or(0))
}

/// POST /api/admin/settings/draft/dark-mode
///
/// Dark mode is applied and persisted at once; other draft edits stay unsaved.
pub async fn toggle_draft_dark_mode(State(state): State<AppState>) -> ApiResult<ThemeSettings> {
    let mut editor = state.editors.settings.lock().await;
    editor.sync(&state.store.settings());
    let toggled = editor.toggle_dark_mode();

    let result = state
        .store
        .update_settings(|current| {
            let mut next = current.clone();
            next.theme.dark_mode_enabled = toggled.enabled;
            Ok(next)
        })
        .await;

    match result {
        Ok(committed) => {
            editor.rebase(committed.record);
            success(editor.theme().clone(), committed.revision_id)
        }
        Err(e) => {
            editor.rebase(state.store.settings());
            Err(with_revision(&state, e).await)
        }
    }
}

/// POST /api/admin/settings/draft/submit
pub async fn submit_settings_draft(
    State(state): State<AppState>,
) -> ApiResult<SaveAck<Arc<AdminSettings>>> {
    let mut editor = state.editors.settings.lock().await;
    editor.sync(&state.store.settings());

    let result = state
        .store
        .update_settings(|current| Ok(editor.submit(current)))
        .await;

    match result {
        Ok(committed) => {
            editor.rebase(committed.record.clone());
            success(
                SaveAck::new("Theme settings saved!", committed.record),
                committed.revision_id,
            )
        }
        Err(e) => Err(with_revision(&state, e).await),
    }
}
