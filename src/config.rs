//! Provider configuration: storage key, marker classes, media query, default.
//!
//! All fields have defaults matching the conventional setup (`"theme"` key,
//! `light`/`dark` classes on `<html>`), so most applications never build one.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::state::theme::Theme;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// `localStorage` key holding the persisted theme.
    pub storage_key: String,
    /// Class placed on the root element while the light theme is active.
    pub light_class: String,
    /// Class placed on the root element while the dark theme is active.
    pub dark_class: String,
    /// Media query consulted when nothing is persisted.
    pub dark_scheme_query: String,
    /// Used when nothing is persisted and the system does not prefer dark.
    pub default_theme: Theme,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            light_class: Theme::Light.as_str().to_owned(),
            dark_class: Theme::Dark.as_str().to_owned(),
            dark_scheme_query: DEFAULT_DARK_SCHEME_QUERY.to_owned(),
            default_theme: Theme::Light,
        }
    }
}

impl ThemeConfig {
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    #[must_use]
    pub fn with_classes(mut self, light: impl Into<String>, dark: impl Into<String>) -> Self {
        self.light_class = light.into();
        self.dark_class = dark.into();
        self
    }

    #[must_use]
    pub fn with_dark_scheme_query(mut self, query: impl Into<String>) -> Self {
        self.dark_scheme_query = query.into();
        self
    }

    #[must_use]
    pub fn with_default_theme(mut self, theme: Theme) -> Self {
        self.default_theme = theme;
        self
    }

    /// Root-element class for `theme`.
    pub fn marker_class(&self, theme: Theme) -> &str {
        match theme {
            Theme::Light => &self.light_class,
            Theme::Dark => &self.dark_class,
        }
    }
}
