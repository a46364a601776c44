//! Destination and blog editor endpoints.
//!
//! Both collections share the same handlers; [`CollectionRoute`] picks the
//! editor session a handler works on.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::{capitalized, success, with_revision, ApiResult, SaveAck};
use crate::editors::{
    ideas_prompt, CollectionEditor, DraftView, EditableItem, EditorSessions, GenerationOutcome,
};
use crate::errors::AppError;
use crate::models::{BlogPost, Destination};
use crate::AppState;

/// An editable collection exposed under `/api/admin/...`.
pub trait CollectionRoute: EditableItem {
    fn editor(sessions: &EditorSessions) -> &Mutex<CollectionEditor<Self>>;
}

impl CollectionRoute for Destination {
    fn editor(sessions: &EditorSessions) -> &Mutex<CollectionEditor<Self>> {
        &sessions.destinations
    }
}

impl CollectionRoute for BlogPost {
    fn editor(sessions: &EditorSessions) -> &Mutex<CollectionEditor<Self>> {
        &sessions.blog
    }
}

fn open_view<T: EditableItem>(editor: &CollectionEditor<T>) -> Result<DraftView<T>, AppError> {
    editor
        .view()
        .ok_or_else(|| AppError::Conflict(format!("No {} draft is open", T::KIND)))
}

/// POST .../draft - Open a draft for a new item.
pub async fn open_add<T: CollectionRoute>(
    State(state): State<AppState>,
) -> ApiResult<DraftView<T>> {
    let content = state.store.content();
    let mut editor = T::editor(&state.editors).lock().await;
    let id = editor.open_add(&content, Utc::now()).id().to_string();
    tracing::debug!("Opened new {} draft {}", T::KIND, id);

    let revision_id = state.store.revision_id().await.unwrap_or(0);
    match open_view(&editor) {
        Ok(view) => success(view, revision_id),
        Err(e) => Err(with_revision(&state, e).await),
    }
}

/// POST .../{id}/edit - Open a draft holding a copy of an existing item.
pub async fn open_edit<T: CollectionRoute>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<DraftView<T>> {
    let content = state.store.content();
    let mut editor = T::editor(&state.editors).lock().await;
    if let Err(e) = editor.open_edit(&content, &id) {
        return Err(with_revision(&state, e).await);
    }

    let revision_id = state.store.revision_id().await.unwrap_or(0);
    match open_view(&editor) {
        Ok(view) => success(view, revision_id),
        Err(e) => Err(with_revision(&state, e).await),
    }
}

/// GET .../draft - The open draft, or `null` when the editor is idle.
pub async fn get_draft<T: CollectionRoute>(
    State(state): State<AppState>,
) -> ApiResult<Option<DraftView<T>>> {
    let view = T::editor(&state.editors).lock().await.view();
    let revision_id = state.store.revision_id().await.unwrap_or(0);
    success(view, revision_id)
}

/// PUT .../draft - Change fields of the open draft.
pub async fn patch_draft<T: CollectionRoute>(
    State(state): State<AppState>,
    Json(patch): Json<T::Patch>,
) -> ApiResult<DraftView<T>> {
    let mut editor = T::editor(&state.editors).lock().await;
    if let Err(e) = editor.patch(patch) {
        return Err(with_revision(&state, e).await);
    }
    match open_view(&editor) {
        Ok(view) => success(view, state.store.revision_id().await.unwrap_or(0)),
        Err(e) => Err(with_revision(&state, e).await),
    }
}

/// DELETE .../draft - Discard the open draft.
pub async fn cancel_draft<T: CollectionRoute>(State(state): State<AppState>) -> ApiResult<bool> {
    let discarded = T::editor(&state.editors).lock().await.cancel();
    success(discarded, state.store.revision_id().await.unwrap_or(0))
}

/// POST .../draft/submit - Validate the draft and commit it into the content record.
pub async fn submit_draft<T: CollectionRoute>(
    State(state): State<AppState>,
) -> ApiResult<SaveAck<T>> {
    let mut editor = T::editor(&state.editors).lock().await;
    let Some(draft) = editor.draft().cloned() else {
        let e = AppError::Conflict(format!("No {} draft is open", T::KIND));
        return Err(with_revision(&state, e).await);
    };

    match state.store.update_content(|content| editor.submit(content)).await {
        Ok(committed) => {
            editor.close();
            tracing::info!("Saved {} {}", T::KIND, draft.id());
            success(
                SaveAck::new(format!("{} saved successfully!", capitalized(T::KIND)), draft),
                committed.revision_id,
            )
        }
        Err(e) => Err(with_revision(&state, e).await),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteQuery {
    #[serde(default)]
    pub confirm: bool,
}

/// DELETE .../{id}?confirm=true - Remove an item. Leaves any open draft alone.
pub async fn delete_item<T: CollectionRoute>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<DeleteQuery>,
) -> ApiResult<SaveAck<String>> {
    let editor = T::editor(&state.editors).lock().await;
    let result = state
        .store
        .update_content(|content| editor.delete(content, &id, query.confirm))
        .await;

    match result {
        Ok(committed) => {
            tracing::info!("Deleted {} {}", T::KIND, id);
            success(
                SaveAck::new(format!("{} deleted.", capitalized(T::KIND)), id),
                committed.revision_id,
            )
        }
        Err(e) => Err(with_revision(&state, e).await),
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateFieldRequest<F> {
    pub field: F,
}

/// POST .../draft/generate - Fill a draft field with generated text.
///
/// The editor lock is released while the model runs; a result arriving after
/// the draft was cancelled or replaced is dropped. The model call and its
/// bookkeeping run in their own task so the session is settled even when the
/// client goes away mid-request.
pub async fn generate<T: CollectionRoute>(
    State(state): State<AppState>,
    Json(request): Json<GenerateFieldRequest<T::Field>>,
) -> ApiResult<DraftView<T>> {
    let begun = T::editor(&state.editors)
        .lock()
        .await
        .begin_generation(request.field);
    let (ticket, prompt) = match begun {
        Ok(started) => started,
        Err(e) => return Err(with_revision(&state, e).await),
    };
    let request = prompt.into_request(&state.config.generation_model);

    let task_state = state.clone();
    let task = tokio::spawn(async move {
        let result = task_state.generator.generate(request).await;
        let mut editor = T::editor(&task_state.editors).lock().await;
        let outcome = editor.finish_generation(ticket, result);
        (outcome, editor.view())
    });

    let error = match task.await {
        Ok((GenerationOutcome::Applied, Some(view))) => {
            return success(view, state.store.revision_id().await.unwrap_or(0))
        }
        Ok((GenerationOutcome::Applied, None)) => {
            AppError::Conflict(format!("No {} draft is open", T::KIND))
        }
        Ok((GenerationOutcome::Failed(message), _)) => AppError::Generation(message),
        Ok((GenerationOutcome::Stale, _)) => AppError::Conflict(format!(
            "The {} draft was closed before generation finished",
            T::KIND
        )),
        Err(e) => {
            tracing::error!("{} generation task failed: {}", T::KIND, e);
            AppError::Internal(format!("{} generation did not complete", capitalized(T::KIND)))
        }
    };
    Err(with_revision(&state, error).await)
}

/// POST /api/admin/blog/ideas - Title ideas shown to the editor, not stored.
pub async fn blog_ideas(State(state): State<AppState>) -> ApiResult<String> {
    let request = ideas_prompt().into_request(&state.config.generation_model);
    match state.generator.generate(request).await {
        Ok(ideas) => success(ideas, state.store.revision_id().await.unwrap_or(0)),
        Err(e) => {
            tracing::warn!("Blog idea generation failed: {}", e);
            let error = AppError::Generation(BlogPost::GENERATION_FAILED.to_string());
            Err(with_revision(&state, error).await)
        }
    }
}
