//! Admin editors. Each holds a draft that is only committed on submit.

mod blog;
mod collection;
mod content;
mod destinations;
mod settings;
mod slug;

pub use blog::*;
pub use collection::*;
pub use content::*;
pub use settings::*;
pub use slug::slugify;

use tokio::sync::Mutex;

use crate::models::{BlogPost, Destination};
use crate::store::SiteStore;

/// The editor sessions of the admin dashboard, one per editor.
pub struct EditorSessions {
    pub destinations: Mutex<CollectionEditor<Destination>>,
    pub blog: Mutex<CollectionEditor<BlogPost>>,
    pub content: Mutex<ContentEditor>,
    pub settings: Mutex<SettingsEditor>,
}

impl EditorSessions {
    pub fn new(store: &SiteStore) -> Self {
        Self {
            destinations: Mutex::new(CollectionEditor::new()),
            blog: Mutex::new(CollectionEditor::new()),
            content: Mutex::new(ContentEditor::new(store.content())),
            settings: Mutex::new(SettingsEditor::new(store.settings())),
        }
    }
}
