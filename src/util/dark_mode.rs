//! Theme resolution at startup and synchronization on change.
//!
//! Reads the user's preference from the host store and applies the matching
//! marker class to the root element. Every change swaps the class and writes
//! the new theme back to the store under the configured key.
//!
//! TRADE-OFFS
//! ==========
//! A stored value that is neither `"light"` nor `"dark"` is ignored, not
//! removed. Resolution falls through to the system preference and the next
//! write overwrites it.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::config::ThemeConfig;
use crate::state::theme::Theme;

use super::host::ThemeHost;

/// The persisted theme, if one is stored and valid.
pub fn stored_preference(host: &dyn ThemeHost, config: &ThemeConfig) -> Option<Theme> {
    host.read(&config.storage_key)?.parse().ok()
}

/// Resolve the initial theme.
///
/// Returns the stored preference if present, otherwise dark when the system
/// prefers dark, otherwise the configured default.
pub fn read_preference(host: &dyn ThemeHost, config: &ThemeConfig) -> Theme {
    if let Some(theme) = stored_preference(host, config) {
        return theme;
    }

    // Fall back to system preference.
    if host.prefers_dark(&config.dark_scheme_query) {
        Theme::Dark
    } else {
        config.default_theme
    }
}

/// Put the marker class for `theme` on the root element and persist it.
pub fn apply(host: &dyn ThemeHost, config: &ThemeConfig, theme: Theme) {
    host.set_marker(config.marker_class(theme), config.marker_class(theme.toggled()));
    host.write(&config.storage_key, theme.as_str());
}

/// Flip `current`, apply and persist the result, and return it.
pub fn toggle(host: &dyn ThemeHost, config: &ThemeConfig, current: Theme) -> Theme {
    let next = current.toggled();
    apply(host, config, next);
    next
}
