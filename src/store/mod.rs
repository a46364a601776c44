//! In-process state store for the content and settings records.
//!
//! Each record lives in a `watch` channel holding an immutable `Arc` snapshot.
//! Commits are serialized through a single lock, written to the repository
//! first and published second, so a subscriber never observes a snapshot that
//! differs from the persisted record.

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::{watch, Mutex};

use crate::db::Repository;
use crate::errors::AppError;
use crate::models::{default_admin_settings, default_site_content, AdminSettings, SiteContent};

/// Persisted key of the site content record.
pub const CONTENT_KEY: &str = "worldclass_site_content";
/// Persisted key of the admin settings record.
pub const SETTINGS_KEY: &str = "worldclass_admin_settings";

/// Presentation flag on the document root, derived from the dark-mode flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootClass {
    Light,
    Dark,
}

impl RootClass {
    pub fn from_dark_mode(enabled: bool) -> Self {
        if enabled {
            RootClass::Dark
        } else {
            RootClass::Light
        }
    }

    /// Class attribute for `<html>`, if any.
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            RootClass::Light => None,
            RootClass::Dark => Some("dark"),
        }
    }
}

/// A record snapshot together with the revision its write produced.
#[derive(Debug, Clone)]
pub struct Committed<T> {
    pub record: Arc<T>,
    pub revision_id: i64,
}

/// Owner of both records and the only writer to their persisted keys.
pub struct SiteStore {
    repo: Arc<Repository>,
    content: watch::Sender<Arc<SiteContent>>,
    settings: watch::Sender<Arc<AdminSettings>>,
    dark_mode: watch::Sender<bool>,
    root_class: watch::Sender<RootClass>,
    commit_lock: Mutex<()>,
}

impl SiteStore {
    /// Seed both records from the repository, substituting defaults for
    /// absent or unparsable values, and write the seeded records back.
    pub async fn load(repo: Arc<Repository>) -> Result<Self, AppError> {
        let content = load_record(&repo, CONTENT_KEY, default_site_content).await?;
        let settings = load_record(&repo, SETTINGS_KEY, default_admin_settings).await?;

        persist(&repo, CONTENT_KEY, &content).await?;
        persist(&repo, SETTINGS_KEY, &settings).await?;

        let dark_mode = settings.theme.dark_mode_enabled;

        Ok(Self {
            repo,
            content: watch::Sender::new(Arc::new(content)),
            settings: watch::Sender::new(Arc::new(settings)),
            dark_mode: watch::Sender::new(dark_mode),
            root_class: watch::Sender::new(RootClass::from_dark_mode(dark_mode)),
            commit_lock: Mutex::new(()),
        })
    }

    pub fn content(&self) -> Arc<SiteContent> {
        self.content.borrow().clone()
    }

    pub fn settings(&self) -> Arc<AdminSettings> {
        self.settings.borrow().clone()
    }

    pub fn dark_mode(&self) -> bool {
        *self.dark_mode.borrow()
    }

    pub fn root_class(&self) -> RootClass {
        *self.root_class.borrow()
    }

    pub fn subscribe_content(&self) -> watch::Receiver<Arc<SiteContent>> {
        self.content.subscribe()
    }

    pub fn subscribe_root_class(&self) -> watch::Receiver<RootClass> {
        self.root_class.subscribe()
    }

    pub async fn revision_id(&self) -> Result<i64, AppError> {
        self.repo.get_revision_id().await
    }

    pub fn repository(&self) -> &Repository {
        &self.repo
    }

    /// Replace the content record wholesale.
    pub async fn replace_content(
        &self,
        content: SiteContent,
    ) -> Result<Committed<SiteContent>, AppError> {
        self.update_content(move |_| Ok(content)).await
    }

    /// Derive a new content record from the current one and commit it.
    ///
    /// `f` runs under the commit lock, so the record it sees is the one its
    /// result replaces.
    pub async fn update_content<F>(&self, f: F) -> Result<Committed<SiteContent>, AppError>
    where
        F: FnOnce(&SiteContent) -> Result<SiteContent, AppError>,
    {
        let _guard = self.commit_lock.lock().await;
        let current = self.content();
        let next = f(current.as_ref())?;
        let revision_id = persist(&self.repo, CONTENT_KEY, &next).await?;

        let record = Arc::new(next);
        self.content.send_replace(record.clone());
        tracing::info!(revision_id, "Committed site content");

        Ok(Committed {
            record,
            revision_id,
        })
    }

    /// Derive a new settings record from the current one and commit it.
    pub async fn update_settings<F>(&self, f: F) -> Result<Committed<AdminSettings>, AppError>
    where
        F: FnOnce(&AdminSettings) -> Result<AdminSettings, AppError>,
    {
        let _guard = self.commit_lock.lock().await;
        let current = self.settings();
        let next = f(current.as_ref())?;
        let revision_id = persist(&self.repo, SETTINGS_KEY, &next).await?;

        let dark_mode = next.theme.dark_mode_enabled;
        let record = Arc::new(next);
        self.settings.send_replace(record.clone());
        self.publish_dark_mode(dark_mode);
        tracing::info!(revision_id, dark_mode, "Committed admin settings");

        Ok(Committed {
            record,
            revision_id,
        })
    }

    /// Flip `theme.darkModeEnabled` and commit the settings record.
    pub async fn toggle_dark_mode(&self) -> Result<Committed<AdminSettings>, AppError> {
        self.update_settings(|current| {
            let mut next = current.clone();
            next.theme.dark_mode_enabled = !next.theme.dark_mode_enabled;
            Ok(next)
        })
        .await
    }

    fn publish_dark_mode(&self, enabled: bool) {
        self.dark_mode.send_if_modified(|current| {
            let changed = *current != enabled;
            *current = enabled;
            changed
        });
        let class = RootClass::from_dark_mode(*self.dark_mode.borrow());
        self.root_class.send_if_modified(|current| {
            let changed = *current != class;
            *current = class;
            changed
        });
    }
}

async fn load_record<T, F>(repo: &Repository, key: &str, default: F) -> Result<T, AppError>
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    let Some(raw) = repo.get(key).await? else {
        tracing::info!("No persisted record under {}, using defaults", key);
        return Ok(default());
    };

    match serde_json::from_str(&raw) {
        Ok(record) => Ok(record),
        Err(e) => {
            tracing::warn!("Persisted record {} is unreadable ({}), using defaults", key, e);
            Ok(default())
        }
    }
}

async fn persist<T: Serialize>(repo: &Repository, key: &str, record: &T) -> Result<i64, AppError> {
    let serialized = serde_json::to_string(record)
        .map_err(|e| AppError::Internal(format!("Failed to serialize {}: {}", key, e)))?;
    repo.put(key, &serialized).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_database;
    use tempfile::TempDir;

    async fn repository(dir: &TempDir) -> Arc<Repository> {
        let pool = init_database(&dir.path().join("store.sqlite"))
            .await
            .expect("Failed to init DB");
        Arc::new(Repository::new(pool))
    }

    #[tokio::test]
    async fn test_load_without_records_uses_and_persists_defaults() {
        let dir = TempDir::new().unwrap();
        let repo = repository(&dir).await;

        let store = SiteStore::load(repo.clone()).await.unwrap();

        assert_eq!(*store.content(), default_site_content());
        assert_eq!(*store.settings(), default_admin_settings());
        assert_eq!(store.root_class(), RootClass::Light);

        let raw = repo.get(CONTENT_KEY).await.unwrap().unwrap();
        let persisted: SiteContent = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted, default_site_content());
    }

    #[tokio::test]
    async fn test_malformed_record_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let repo = repository(&dir).await;
        repo.put(CONTENT_KEY, "{not json").await.unwrap();
        repo.put(SETTINGS_KEY, r#"{"theme":{"primaryColor":"magenta"}}"#)
            .await
            .unwrap();

        let store = SiteStore::load(repo).await.unwrap();

        assert_eq!(*store.content(), default_site_content());
        assert_eq!(*store.settings(), default_admin_settings());
    }

    #[tokio::test]
    async fn test_saved_content_survives_reload() {
        let dir = TempDir::new().unwrap();
        let repo = repository(&dir).await;
        let store = SiteStore::load(repo.clone()).await.unwrap();

        let mut edited = (*store.content()).clone();
        edited.hero.title = "Somewhere New".to_string();
        let committed = store.replace_content(edited.clone()).await.unwrap();
        assert_eq!(*committed.record, edited);

        let raw = repo.get(CONTENT_KEY).await.unwrap().unwrap();
        assert_eq!(serde_json::from_str::<SiteContent>(&raw).unwrap(), edited);

        let reloaded = SiteStore::load(repo).await.unwrap();
        assert_eq!(*reloaded.content(), edited);
    }

    #[tokio::test]
    async fn test_subscribers_see_committed_snapshot() {
        let dir = TempDir::new().unwrap();
        let store = SiteStore::load(repository(&dir).await).await.unwrap();
        let mut rx = store.subscribe_content();

        store
            .update_content(|current| {
                let mut next = current.clone();
                next.footer_description = "Updated".to_string();
                Ok(next)
            })
            .await
            .unwrap();

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().footer_description, "Updated");
    }

    #[tokio::test]
    async fn test_failed_update_leaves_record_untouched() {
        let dir = TempDir::new().unwrap();
        let store = SiteStore::load(repository(&dir).await).await.unwrap();
        let before = store.revision_id().await.unwrap();

        let result = store
            .update_content(|_| Err(AppError::Validation("nope".to_string())))
            .await;

        assert!(result.is_err());
        assert_eq!(*store.content(), default_site_content());
        assert_eq!(store.revision_id().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_dark_mode_toggle_twice_restores_flag() {
        let dir = TempDir::new().unwrap();
        let store = SiteStore::load(repository(&dir).await).await.unwrap();
        let mut root = store.subscribe_root_class();

        store.toggle_dark_mode().await.unwrap();
        assert!(store.dark_mode());
        assert!(store.settings().theme.dark_mode_enabled);
        root.changed().await.unwrap();
        assert_eq!(*root.borrow_and_update(), RootClass::Dark);

        store.toggle_dark_mode().await.unwrap();
        assert!(!store.dark_mode());
        assert_eq!(store.dark_mode(), store.settings().theme.dark_mode_enabled);
        assert_eq!(store.root_class(), RootClass::Light);
        assert_eq!(store.root_class().css_class(), None);
    }
}
