//! Reactive theme handle provided to descendant components.
//!
//! DESIGN
//! ======
//! `ThemeContext` is created once per provider and is `Copy`; consumers keep
//! the same handle for the provider's whole lifetime. Host side effects run
//! before the signal is set, so the root element class and the stored value
//! are already updated when anything reading the theme re-renders.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::ThemeConfig;
use crate::state::theme::Theme;
use crate::util::broadcast;
use crate::util::dark_mode;
use crate::util::host::{BrowserHost, ThemeHost};

#[derive(Clone)]
struct ThemeEnv {
    host: Arc<dyn ThemeHost>,
    config: Arc<ThemeConfig>,
}

/// Current theme, `is_dark` flag and toggle capability.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
    is_dark: Memo<bool>,
    env: StoredValue<ThemeEnv>,
}

impl ThemeContext {
    /// Resolve the initial theme from `host` and apply it.
    ///
    /// Does not listen for changes from other tabs; see [`provide_theme_with`].
    pub fn new(host: Arc<dyn ThemeHost>, config: ThemeConfig) -> Self {
        let initial = dark_mode::read_preference(host.as_ref(), &config);
        dark_mode::apply(host.as_ref(), &config, initial);

        let theme = RwSignal::new(initial);
        Self {
            theme,
            is_dark: Memo::new(move |_| theme.get().is_dark()),
            env: StoredValue::new(ThemeEnv {
                host,
                config: Arc::new(config),
            }),
        }
    }

    /// Current theme (tracked).
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn theme_untracked(&self) -> Theme {
        self.theme.get_untracked()
    }

    /// Whether the dark theme is active (tracked). Only notifies when the
    /// flag itself changes.
    pub fn is_dark(&self) -> bool {
        self.is_dark.get()
    }

    /// Read-only signal over the current theme.
    pub fn signal(&self) -> Signal<Theme> {
        self.theme.into()
    }

    /// Flip between light and dark.
    pub fn toggle_theme(&self) {
        let Some(env) = self.env.try_get_value() else {
            return;
        };
        let next = dark_mode::toggle(env.host.as_ref(), &env.config, self.theme.get_untracked());
        self.theme.set(next);
    }

    /// Switch to `next`. Setting the current theme again does nothing.
    pub fn set_theme(&self, next: Theme) {
        if self.theme.get_untracked() == next {
            return;
        }
        if let Some(env) = self.env.try_get_value() {
            dark_mode::apply(env.host.as_ref(), &env.config, next);
        }
        self.theme.set(next);
    }
}

/// Create a [`ThemeContext`] on the browser host with default configuration
/// and provide it to descendants.
pub fn provide_theme() -> ThemeContext {
    provide_theme_with(Arc::new(BrowserHost), ThemeConfig::default())
}

/// Create a [`ThemeContext`], provide it to descendants and keep it in sync
/// with other tabs until the current owner is cleaned up.
pub fn provide_theme_with(host: Arc<dyn ThemeHost>, config: ThemeConfig) -> ThemeContext {
    let ctx = ThemeContext::new(Arc::clone(&host), config.clone());

    let subscription = broadcast::listen(host.as_ref(), &config, move |theme| {
        if ctx.theme_untracked() != theme {
            leptos::logging::log!("theme: {theme} applied from another tab");
        }
        ctx.set_theme(theme);
    });
    let subscription = StoredValue::new_local(Some(subscription));
    on_cleanup(move || {
        subscription.update_value(|sub| drop(sub.take()));
    });

    provide_context(ctx);
    ctx
}

/// The nearest provided [`ThemeContext`].
///
/// # Panics
///
/// Panics when called outside a [`ThemeProvider`](crate::ThemeProvider).
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

/// The nearest provided [`ThemeContext`], if any.
pub fn try_use_theme() -> Option<ThemeContext> {
    use_context::<ThemeContext>()
}
