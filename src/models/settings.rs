//! Admin settings model: theme plus display-only analytics counters.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::PaletteColor;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    pub primary_color: PaletteColor,
    pub accent_color: PaletteColor,
    #[serde(default = "default_text_color")]
    pub text_color: String,
    #[serde(default = "default_background_color")]
    pub background_color: String,
    /// CSS `font-family` value for headings.
    pub font_family_heading: String,
    /// CSS `font-family` value for body text.
    pub font_family_body: String,
    /// A missing or non-boolean value reads as `false`.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub dark_mode_enabled: bool,
}

fn default_text_color() -> String {
    "gray-900".to_string()
}

fn default_background_color() -> String {
    "gray-50".to_string()
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_bool().unwrap_or(false))
}

/// Page view and conversion counters. Never written by the application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    #[serde(default)]
    pub page_views: BTreeMap<String, u64>,
    #[serde(default)]
    pub bookings: u64,
    #[serde(default)]
    pub newsletter_signups: u64,
}

impl AnalyticsData {
    pub fn total_page_views(&self) -> u64 {
        self.page_views.values().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSettings {
    pub theme: ThemeSettings,
    #[serde(default)]
    pub analytics: AnalyticsData,
}
