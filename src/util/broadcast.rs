//! Cross-tab theme sync via storage change notifications.
//!
//! Only changes to the configured key carrying a valid theme literal are
//! forwarded. Foreign keys, cleared keys and unknown values are dropped
//! without surfacing an error.

#[cfg(test)]
#[path = "broadcast_test.rs"]
mod broadcast_test;

use crate::config::ThemeConfig;
use crate::state::theme::Theme;

use super::host::{StorageChange, Subscription, ThemeHost};

/// The theme carried by `change`, if it targets the theme key with a valid
/// value.
pub fn theme_from_change(change: &StorageChange, config: &ThemeConfig) -> Option<Theme> {
    if change.key.as_deref() != Some(config.storage_key.as_str()) {
        return None;
    }
    let raw = change.new_value.as_deref()?;
    match raw.parse() {
        Ok(theme) => Some(theme),
        Err(err) => {
            leptos::logging::debug_warn!("theme: ignoring storage change: {err}");
            None
        }
    }
}

/// Subscribe to storage changes and call `on_theme` for each accepted one.
///
/// The listener is removed when the returned [`Subscription`] is dropped.
pub fn listen<F>(host: &dyn ThemeHost, config: &ThemeConfig, on_theme: F) -> Subscription
where
    F: Fn(Theme) + Send + Sync + 'static,
{
    let config = config.clone();
    host.subscribe(Box::new(move |change: StorageChange| {
        if let Some(theme) = theme_from_change(&change, &config) {
            on_theme(theme);
        }
    }))
}
