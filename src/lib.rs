//! # theme-provider
//!
//! Light/dark theme preference for Leptos applications.
//!
//! The initial theme is resolved once from `localStorage`, then the system
//! `prefers-color-scheme`, then a default. Every change is mirrored onto the
//! `<html>` element as a marker class and written back to `localStorage`.
//! Changes made in other tabs arrive through the window `storage` event and
//! are applied locally.
//!
//! Descendant components read the theme through [`ThemeContext`], provided by
//! [`ThemeProvider`] and looked up with [`use_theme`].
//!
//! Host access (storage, media query, DOM, events) goes through the
//! [`ThemeHost`] trait. [`BrowserHost`] talks to `web-sys` when the `hydrate`
//! or `csr` feature is enabled; [`MemoryHost`] is an in-memory stand-in for
//! tests.

pub mod components;
pub mod config;
pub mod state;
pub mod util;

pub use components::theme_provider::ThemeProvider;
pub use components::theme_toggle::ThemeToggle;
pub use config::ThemeConfig;
pub use state::context::{ThemeContext, provide_theme, provide_theme_with, try_use_theme, use_theme};
pub use state::theme::{ParseThemeError, Theme};
pub use util::host::{BrowserHost, StorageChange, StorageHandler, Subscription, ThemeHost};
pub use util::memory_host::MemoryHost;

/// Install the panic hook and console logger for browser builds.
///
/// Call once from the application's WASM entry point.
#[cfg(feature = "browser")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}
