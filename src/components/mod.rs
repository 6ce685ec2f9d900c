//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ThemeProvider` installs the theme context for a subtree; `ThemeToggle`
//! is a ready-made consumer of it.

pub mod theme_provider;
pub mod theme_toggle;
