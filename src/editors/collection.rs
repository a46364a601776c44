//! Draft/submit state machine shared by the destination and blog editors.
//!
//! An editor is either idle or holds one draft session. Field changes touch
//! only the draft; submit and delete produce a whole new content record that
//! the caller commits through the store.

use std::fmt::Debug;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::AppError;
use crate::generation::Prompt;
use crate::models::SiteContent;

/// A list item of [`SiteContent`] editable through a [`CollectionEditor`].
pub trait EditableItem: Clone + Debug + Serialize + Send + Sync + 'static {
    /// Human-readable name used in messages, e.g. `destination`.
    const KIND: &'static str;
    /// Prefix of generated identifiers, e.g. `d` for `d-1700000000000`.
    const ID_PREFIX: &'static str;
    /// Inline message shown when generation fails.
    const GENERATION_FAILED: &'static str;

    /// Partial field update applied to a draft.
    type Patch: DeserializeOwned + Send + 'static;
    /// Field a generated text can be written into.
    type Field: Copy + Debug + DeserializeOwned + Send + 'static;

    fn id(&self) -> &str;

    /// A fresh item seeded with defaults.
    fn new_draft(id: String, today: NaiveDate) -> Self;

    /// Names of required fields left blank.
    fn missing_fields(&self) -> Vec<&'static str>;

    fn slice(content: &SiteContent) -> &[Self];
    fn slice_mut(content: &mut SiteContent) -> &mut Vec<Self>;

    fn apply_patch(&mut self, patch: Self::Patch);

    fn generation_prompt(&self, field: Self::Field) -> Prompt;
    fn apply_generated(&mut self, field: Self::Field, text: String);
}

#[derive(Debug, Clone)]
struct DraftSession<T> {
    epoch: u64,
    draft: T,
    is_new: bool,
    generating: bool,
    generation_error: Option<String>,
}

/// Snapshot of an open draft returned to API clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftView<T> {
    pub draft: T,
    pub is_new: bool,
    pub generating: bool,
    pub generation_error: Option<String>,
}

/// Identifies the draft session a generation request was issued for.
#[derive(Debug, Clone, Copy)]
pub struct GenerationTicket<F> {
    epoch: u64,
    field: F,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Applied,
    Failed(String),
    /// The session the request belonged to is gone; the result was dropped.
    Stale,
}

#[derive(Debug)]
pub struct CollectionEditor<T: EditableItem> {
    session: Option<DraftSession<T>>,
    epoch: u64,
}

impl<T: EditableItem> Default for CollectionEditor<T> {
    fn default() -> Self {
        Self {
            session: None,
            epoch: 0,
        }
    }
}

impl<T: EditableItem> CollectionEditor<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> Option<&T> {
        self.session.as_ref().map(|session| &session.draft)
    }

    pub fn view(&self) -> Option<DraftView<T>> {
        self.session.as_ref().map(|session| DraftView {
            draft: session.draft.clone(),
            is_new: session.is_new,
            generating: session.generating,
            generation_error: session.generation_error.clone(),
        })
    }

    fn open(&mut self, draft: T, is_new: bool) -> &T {
        self.epoch += 1;
        if let Some(previous) = &self.session {
            tracing::debug!("Discarding open {} draft {}", T::KIND, previous.draft.id());
        }
        let session = self.session.insert(DraftSession {
            epoch: self.epoch,
            draft,
            is_new,
            generating: false,
            generation_error: None,
        });
        &session.draft
    }

    /// Open a draft for a new item with a timestamp-derived identifier.
    pub fn open_add(&mut self, content: &SiteContent, now: DateTime<Utc>) -> &T {
        let items = T::slice(content);
        let mut millis = now.timestamp_millis();
        let id = loop {
            let candidate = format!("{}-{}", T::ID_PREFIX, millis);
            if items.iter().all(|item| item.id() != candidate) {
                break candidate;
            }
            millis += 1;
        };

        self.open(T::new_draft(id, now.date_naive()), true)
    }

    /// Open a draft holding a copy of an existing item.
    pub fn open_edit(&mut self, content: &SiteContent, id: &str) -> Result<&T, AppError> {
        let item = T::slice(content)
            .iter()
            .find(|item| item.id() == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("{} {} not found", T::KIND, id)))?;

        Ok(self.open(item, false))
    }

    fn session_mut(&mut self) -> Result<&mut DraftSession<T>, AppError> {
        self.session
            .as_mut()
            .ok_or_else(|| AppError::Conflict(format!("No {} draft is open", T::KIND)))
    }

    pub fn patch(&mut self, patch: T::Patch) -> Result<&T, AppError> {
        let session = self.session_mut()?;
        session.draft.apply_patch(patch);
        Ok(&session.draft)
    }

    /// Discard the draft. Returns whether one was open.
    pub fn cancel(&mut self) -> bool {
        self.session.take().is_some()
    }

    /// Close the session after its submitted record was committed.
    pub fn close(&mut self) {
        self.session = None;
    }

    /// Merge the draft into a copy of `content`: replace the item with the same
    /// identifier in place, or append it. The session stays open until
    /// [`close`](Self::close) so a failed commit keeps the draft.
    pub fn submit(&self, content: &SiteContent) -> Result<SiteContent, AppError> {
        let session = self
            .session
            .as_ref()
            .ok_or_else(|| AppError::Conflict(format!("No {} draft is open", T::KIND)))?;

        let missing = session.draft.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::MissingFields(missing));
        }

        let mut next = content.clone();
        let items = T::slice_mut(&mut next);
        let draft = session.draft.clone();
        match items.iter_mut().find(|item| item.id() == draft.id()) {
            Some(existing) => *existing = draft,
            None => items.push(draft),
        }
        Ok(next)
    }

    /// Copy of `content` without the item `id`. Does not touch the draft.
    pub fn delete(
        &self,
        content: &SiteContent,
        id: &str,
        confirmed: bool,
    ) -> Result<SiteContent, AppError> {
        if !confirmed {
            return Err(AppError::Validation(format!(
                "Deleting a {} must be confirmed",
                T::KIND
            )));
        }

        let mut next = content.clone();
        let items = T::slice_mut(&mut next);
        let before = items.len();
        items.retain(|item| item.id() != id);
        if items.len() == before {
            return Err(AppError::NotFound(format!("{} {} not found", T::KIND, id)));
        }
        Ok(next)
    }

    /// Mark the draft as generating and build the prompt for `field`.
    /// Only one request may be outstanding per session.
    pub fn begin_generation(
        &mut self,
        field: T::Field,
    ) -> Result<(GenerationTicket<T::Field>, Prompt), AppError> {
        let session = self.session_mut()?;
        if session.generating {
            return Err(AppError::Conflict(
                "A generation request is already in progress".to_string(),
            ));
        }

        session.generating = true;
        session.generation_error = None;
        let prompt = session.draft.generation_prompt(field);
        Ok((
            GenerationTicket {
                epoch: session.epoch,
                field,
            },
            prompt,
        ))
    }

    /// Apply a generation result if the session it was issued for is still open.
    pub fn finish_generation(
        &mut self,
        ticket: GenerationTicket<T::Field>,
        result: Result<String, AppError>,
    ) -> GenerationOutcome {
        let Some(session) = self
            .session
            .as_mut()
            .filter(|session| session.epoch == ticket.epoch)
        else {
            tracing::info!("Dropping generated text for a closed {} draft", T::KIND);
            return GenerationOutcome::Stale;
        };

        session.generating = false;
        match result {
            Ok(text) => {
                session.draft.apply_generated(ticket.field, text);
                GenerationOutcome::Applied
            }
            Err(e) => {
                tracing::warn!("{} generation failed: {}", T::KIND, e);
                session.generation_error = Some(T::GENERATION_FAILED.to_string());
                GenerationOutcome::Failed(T::GENERATION_FAILED.to_string())
            }
        }
    }
}
