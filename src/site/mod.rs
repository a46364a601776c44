//! Public pages and the read-only admin views.
//!
//! Handlers take one snapshot of both records per request and render from it.

pub mod contact;
pub mod filter;
pub mod newsletter;
pub mod pages;
pub mod theme;

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use maud::Markup;
use serde::Deserialize;

use crate::errors::{AppError, AppErrorWithRevision};
use crate::models::{AdminSettings, SiteContent};
use crate::store::RootClass;
use crate::AppState;
use contact::{ContactForm, ContactFormErrors};
use newsletter::{NewsletterForm, NewsletterStatus};
use pages::{CatalogQuery, Page};

struct Snapshot {
    content: Arc<SiteContent>,
    settings: Arc<AdminSettings>,
    root: RootClass,
}

impl Snapshot {
    fn take(state: &AppState) -> Self {
        Self {
            content: state.store.content(),
            settings: state.store.settings(),
            root: state.store.root_class(),
        }
    }

    fn page<'a>(&'a self, path: &'a str) -> Page<'a> {
        Page {
            content: &self.content,
            settings: &self.settings,
            root: self.root,
            path,
            newsletter: NewsletterStatus::Idle,
        }
    }
}

/// GET /
pub async fn home(State(state): State<AppState>, uri: Uri) -> Markup {
    pages::home(&Snapshot::take(&state).page(uri.path()))
}

/// GET /about
pub async fn about(State(state): State<AppState>, uri: Uri) -> Markup {
    pages::about(&Snapshot::take(&state).page(uri.path()))
}

/// GET /destinations?search=&category=
pub async fn destinations(
    State(state): State<AppState>,
    uri: Uri,
    Query(query): Query<CatalogQuery>,
) -> Markup {
    pages::destinations(&Snapshot::take(&state).page(uri.path()), &query)
}

/// GET /destinations/{id}/book - booking placeholder.
pub async fn book_destination(
    State(state): State<AppState>,
    uri: Uri,
    Path(id): Path<String>,
) -> Response {
    let snapshot = Snapshot::take(&state);
    let page = snapshot.page(uri.path());
    match snapshot.content.destinations.iter().find(|d| d.id == id) {
        Some(destination) => pages::booking(&page, destination).into_response(),
        None => (StatusCode::NOT_FOUND, pages::not_found(&page, "Destination")).into_response(),
    }
}

/// GET /services
pub async fn services(State(state): State<AppState>, uri: Uri) -> Markup {
    pages::services(&Snapshot::take(&state).page(uri.path()))
}

/// GET /blog?search=&tag=
pub async fn blog(
    State(state): State<AppState>,
    uri: Uri,
    Query(query): Query<CatalogQuery>,
) -> Markup {
    pages::blog(&Snapshot::take(&state).page(uri.path()), &query)
}

/// GET /blog/{slug}
pub async fn blog_post(
    State(state): State<AppState>,
    uri: Uri,
    Path(slug): Path<String>,
) -> Response {
    let snapshot = Snapshot::take(&state);
    let page = snapshot.page(uri.path());
    match filter::find_post_by_slug(&snapshot.content.blog_posts, &slug) {
        Some(post) => pages::blog_post(&page, post).into_response(),
        None => (StatusCode::NOT_FOUND, pages::not_found(&page, "Blog Post")).into_response(),
    }
}

/// GET /contact
pub async fn contact_page(State(state): State<AppState>, uri: Uri) -> Markup {
    let snapshot = Snapshot::take(&state);
    pages::contact(
        &snapshot.page(uri.path()),
        &ContactForm::default(),
        &ContactFormErrors::default(),
        false,
    )
}

/// POST /contact - validate, then hand the message to the contact sink.
pub async fn contact_submit(
    State(state): State<AppState>,
    uri: Uri,
    Form(form): Form<ContactForm>,
) -> Response {
    let snapshot = Snapshot::take(&state);
    let page = snapshot.page(uri.path());

    let errors = form.validate();
    if !errors.is_empty() {
        tracing::debug!("Contact form rejected with {} errors", errors.count());
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            pages::contact(&page, &form, &errors, false),
        )
            .into_response();
    }

    match state.contact_sink.deliver(&form).await {
        Ok(()) => pages::contact(
            &page,
            &ContactForm::default(),
            &ContactFormErrors::default(),
            true,
        )
        .into_response(),
        Err(e) => {
            tracing::warn!("Failed to deliver contact message: {}", e);
            let revision_id = state.store.revision_id().await.unwrap_or(0);
            AppErrorWithRevision {
                error: AppError::Internal(
                    "There was an error sending your message. Please try again.".to_string(),
                ),
                revision_id,
            }
            .into_response()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DarkModeForm {
    pub redirect: Option<String>,
}

/// Only same-site absolute paths are followed after toggling.
fn local_path(redirect: Option<&str>) -> &str {
    match redirect {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => "/",
    }
}

/// POST /settings/dark-mode - header toggle; returns to the page it came from.
pub async fn toggle_dark_mode(
    State(state): State<AppState>,
    Form(form): Form<DarkModeForm>,
) -> Result<Redirect, AppErrorWithRevision> {
    match state.store.toggle_dark_mode().await {
        Ok(_) => Ok(Redirect::to(local_path(form.redirect.as_deref()))),
        Err(error) => {
            let revision_id = state.store.revision_id().await.unwrap_or(0);
            Err(AppErrorWithRevision { error, revision_id })
        }
    }
}

/// POST /newsletter - footer signup; answers with the footer in its new state.
pub async fn newsletter_submit(
    State(state): State<AppState>,
    Form(form): Form<NewsletterForm>,
) -> Response {
    let snapshot = Snapshot::take(&state);
    let mut page = snapshot.page(local_path(form.redirect.as_deref()));

    let email = match form.validate() {
        Ok(email) => email,
        Err(error) => {
            page.newsletter = NewsletterStatus::Rejected(error);
            return (StatusCode::UNPROCESSABLE_ENTITY, pages::newsletter(&page)).into_response();
        }
    };

    match state.newsletter_sink.subscribe(email).await {
        Ok(()) => {
            page.newsletter = NewsletterStatus::Subscribed;
            pages::newsletter(&page).into_response()
        }
        Err(e) => {
            tracing::warn!("Failed to record newsletter signup: {}", e);
            let revision_id = state.store.revision_id().await.unwrap_or(0);
            AppErrorWithRevision {
                error: AppError::Internal(
                    "There was an error subscribing you. Please try again.".to_string(),
                ),
                revision_id,
            }
            .into_response()
        }
    }
}

/// GET /admin
pub async fn admin_overview(State(state): State<AppState>, uri: Uri) -> Markup {
    let revision_id = state.store.revision_id().await.unwrap_or(0);
    pages::admin_overview(&Snapshot::take(&state).page(uri.path()), revision_id)
}

/// GET /admin/analytics
pub async fn admin_analytics(State(state): State<AppState>, uri: Uri) -> Markup {
    pages::admin_analytics(&Snapshot::take(&state).page(uri.path()))
}

/// GET /admin/content
pub async fn admin_content(State(state): State<AppState>, uri: Uri) -> Markup {
    pages::admin_content(&Snapshot::take(&state).page(uri.path()))
}

/// GET /admin/destinations
pub async fn admin_destinations(State(state): State<AppState>, uri: Uri) -> Markup {
    pages::admin_destinations(&Snapshot::take(&state).page(uri.path()))
}

/// GET /admin/blog
pub async fn admin_blog(State(state): State<AppState>, uri: Uri) -> Markup {
    pages::admin_blog(&Snapshot::take(&state).page(uri.path()))
}

/// GET /admin/settings
pub async fn admin_settings(State(state): State<AppState>, uri: Uri) -> Markup {
    pages::admin_settings(&Snapshot::take(&state).page(uri.path()))
}

/// Any unmatched path.
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> (StatusCode, Markup) {
    let snapshot = Snapshot::take(&state);
    (
        StatusCode::NOT_FOUND,
        pages::not_found(&snapshot.page(uri.path()), "Page"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_path_rejects_foreign_redirects() {
        assert_eq!(local_path(Some("/blog?tag=Food")), "/blog?tag=Food");
        assert_eq!(local_path(Some("//evil.example")), "/");
        assert_eq!(local_path(Some("https://evil.example")), "/");
        assert_eq!(local_path(None), "/");
    }
}
