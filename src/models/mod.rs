//! Data models for the site content and admin settings records.
//!
//! These models serialize to the same JSON documents the site has always persisted.

mod content;
mod defaults;
mod palette;
mod settings;

pub use content::*;
pub use defaults::*;
pub use palette::*;
pub use settings::*;
