//! Site content editor endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use super::{success, with_revision, ApiResult, SaveAck};
use crate::editors::{ContentEdit, ContentEditor};
use crate::models::SiteContent;
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDraftView {
    pub draft: SiteContent,
    pub dirty: bool,
}

impl ContentDraftView {
    fn of(editor: &ContentEditor) -> Self {
        Self {
            draft: editor.draft().clone(),
            dirty: editor.is_dirty(),
        }
    }
}

/// GET /api/admin/content/draft
pub async fn get_content_draft(State(state): State<AppState>) -> ApiResult<ContentDraftView> {
    let mut editor = state.editors.content.lock().await;
    editor.sync(&state.store.content());
    success(
        ContentDraftView::of(&editor),
        state.store.revision_id().await.unwrap_or(0),
    )
}

/// DELETE /api/admin/content/draft - Throw away unsaved edits.
pub async fn reset_content_draft(State(state): State<AppState>) -> ApiResult<ContentDraftView> {
    let mut editor = state.editors.content.lock().await;
    if !editor.sync(&state.store.content()) {
        editor.reset();
    }
    success(
        ContentDraftView::of(&editor),
        state.store.revision_id().await.unwrap_or(0),
    )
}

/// POST /api/admin/content/draft/edits - Apply a batch of field edits.
pub async fn apply_content_edits(
    State(state): State<AppState>,
    Json(edits): Json<Vec<ContentEdit>>,
) -> ApiResult<ContentDraftView> {
    let mut editor = state.editors.content.lock().await;
    editor.sync(&state.store.content());
    if let Err(e) = editor.apply(edits) {
        return Err(with_revision(&state, e).await);
    }
    success(
        ContentDraftView::of(&editor),
        state.store.revision_id().await.unwrap_or(0),
    )
}

/// POST /api/admin/content/draft/submit - Commit the draft as the new record.
pub async fn submit_content_draft(
    State(state): State<AppState>,
) -> ApiResult<SaveAck<Arc<SiteContent>>> {
    let mut editor = state.editors.content.lock().await;
    editor.sync(&state.store.content());

    match state.store.replace_content(editor.submit()).await {
        Ok(committed) => {
            editor.rebase(committed.record.clone());
            success(
                SaveAck::new("Site content updated successfully!", committed.record),
                committed.revision_id,
            )
        }
        Err(e) => Err(with_revision(&state, e).await),
    }
}
