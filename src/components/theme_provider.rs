//! Context provider wrapping a subtree with theme state.

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::ThemeConfig;
use crate::state::context::provide_theme_with;
use crate::util::host::{BrowserHost, ThemeHost};

/// Provides a [`ThemeContext`](crate::ThemeContext) to its children.
///
/// Resolves the initial theme once, applies it to `<html>`, and listens for
/// changes from other tabs until the provider unmounts. Uses the browser host
/// and default configuration unless `host` or `config` is given.
#[component]
pub fn ThemeProvider(
    #[prop(optional)] config: Option<ThemeConfig>,
    #[prop(optional)] host: Option<Arc<dyn ThemeHost>>,
    children: Children,
) -> impl IntoView {
    let host = host.unwrap_or_else(|| Arc::new(BrowserHost));
    provide_theme_with(host, config.unwrap_or_default());

    children()
}
