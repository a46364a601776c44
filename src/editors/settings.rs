//! Theme settings editor.

use std::sync::Arc;

use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{AdminSettings, PaletteColor, ThemeSettings};

/// Field update for the theme draft. Dark mode has its own toggle.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemePatch {
    pub primary_color: Option<PaletteColor>,
    pub accent_color: Option<PaletteColor>,
    pub text_color: Option<String>,
    pub background_color: Option<String>,
    pub font_family_heading: Option<String>,
    pub font_family_body: Option<String>,
}

/// Returned by [`SettingsEditor::toggle_dark_mode`]; the owner must apply it
/// to the store so the change is visible at once.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DarkModeToggled {
    pub enabled: bool,
}

/// Draft of the theme slice of the settings record.
#[derive(Debug)]
pub struct SettingsEditor {
    base: Arc<AdminSettings>,
    theme: ThemeSettings,
}

fn theme_color(color: PaletteColor) -> Result<PaletteColor, AppError> {
    if PaletteColor::THEME_CHOICES.contains(&color) {
        Ok(color)
    } else {
        Err(AppError::Validation(format!(
            "{} is not available as a theme color",
            color.label()
        )))
    }
}

impl SettingsEditor {
    pub fn new(base: Arc<AdminSettings>) -> Self {
        let theme = base.theme.clone();
        Self { base, theme }
    }

    /// Reseed the draft when the committed record changed underneath it.
    pub fn sync(&mut self, current: &Arc<AdminSettings>) -> bool {
        if Arc::ptr_eq(&self.base, current) {
            return false;
        }
        *self = Self::new(current.clone());
        true
    }

    pub fn theme(&self) -> &ThemeSettings {
        &self.theme
    }

    pub fn set_primary_color(&mut self, color: PaletteColor) -> Result<(), AppError> {
        self.theme.primary_color = theme_color(color)?;
        Ok(())
    }

    pub fn set_accent_color(&mut self, color: PaletteColor) -> Result<(), AppError> {
        self.theme.accent_color = theme_color(color)?;
        Ok(())
    }

    pub fn set_text_color(&mut self, value: impl Into<String>) {
        self.theme.text_color = value.into();
    }

    pub fn set_background_color(&mut self, value: impl Into<String>) {
        self.theme.background_color = value.into();
    }

    pub fn set_font_family_heading(&mut self, value: impl Into<String>) {
        self.theme.font_family_heading = value.into();
    }

    pub fn set_font_family_body(&mut self, value: impl Into<String>) {
        self.theme.font_family_body = value.into();
    }

    /// Apply every present field, or none if a color is rejected.
    pub fn patch(&mut self, patch: ThemePatch) -> Result<&ThemeSettings, AppError> {
        let primary = patch.primary_color.map(theme_color).transpose()?;
        let accent = patch.accent_color.map(theme_color).transpose()?;

        if let Some(color) = primary {
            self.theme.primary_color = color;
        }
        if let Some(color) = accent {
            self.theme.accent_color = color;
        }
        if let Some(value) = patch.text_color {
            self.set_text_color(value);
        }
        if let Some(value) = patch.background_color {
            self.set_background_color(value);
        }
        if let Some(value) = patch.font_family_heading {
            self.set_font_family_heading(value);
        }
        if let Some(value) = patch.font_family_body {
            self.set_font_family_body(value);
        }
        Ok(&self.theme)
    }

    /// Flip the draft flag.
    pub fn toggle_dark_mode(&mut self) -> DarkModeToggled {
        self.theme.dark_mode_enabled = !self.theme.dark_mode_enabled;
        DarkModeToggled {
            enabled: self.theme.dark_mode_enabled,
        }
    }

    /// `settings` with the draft theme merged in.
    pub fn submit(&self, settings: &AdminSettings) -> AdminSettings {
        AdminSettings {
            theme: self.theme.clone(),
            ..settings.clone()
        }
    }

    /// Adopt a committed record as the base while keeping unsaved theme edits.
    /// The dark-mode flag always follows the committed record.
    pub fn rebase(&mut self, committed: Arc<AdminSettings>) {
        self.theme.dark_mode_enabled = committed.theme.dark_mode_enabled;
        self.base = committed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_admin_settings;

    fn editor() -> SettingsEditor {
        SettingsEditor::new(Arc::new(default_admin_settings()))
    }

    #[test]
    fn test_submit_merges_theme_only() {
        let mut editor = editor();
        editor.set_primary_color(PaletteColor::Purple).unwrap();
        editor.set_font_family_body("Georgia, serif");

        let base = default_admin_settings();
        let next = editor.submit(&base);
        assert_eq!(next.theme.primary_color, PaletteColor::Purple);
        assert_eq!(next.theme.font_family_body, "Georgia, serif");
        assert_eq!(next.analytics, base.analytics);
    }

    #[test]
    fn test_gray_is_not_a_theme_color() {
        let mut editor = editor();
        let patch = ThemePatch {
            primary_color: Some(PaletteColor::Green),
            accent_color: Some(PaletteColor::Gray),
            ..Default::default()
        };

        assert!(matches!(editor.patch(patch), Err(AppError::Validation(_))));
        assert_eq!(editor.theme().primary_color, PaletteColor::Blue);
    }

    #[test]
    fn test_toggle_then_rebase_keeps_other_edits() {
        let mut editor = editor();
        editor.set_accent_color(PaletteColor::Orange).unwrap();

        let toggled = editor.toggle_dark_mode();
        assert!(toggled.enabled);

        let mut committed = default_admin_settings();
        committed.theme.dark_mode_enabled = true;
        let committed = Arc::new(committed);
        editor.rebase(committed.clone());

        assert!(!editor.sync(&committed));
        assert!(editor.theme().dark_mode_enabled);
        assert_eq!(editor.theme().accent_color, PaletteColor::Orange);
    }

    #[test]
    fn test_sync_reseeds_from_new_snapshot() {
        let mut editor = editor();
        editor.set_text_color("gray-700");

        let mut changed = default_admin_settings();
        changed.theme.dark_mode_enabled = true;
        assert!(editor.sync(&Arc::new(changed)));
        assert_eq!(editor.theme().text_color, "gray-900");
        assert!(editor.theme().dark_mode_enabled);
    }
}
