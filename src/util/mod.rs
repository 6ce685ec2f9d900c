//! Host-facing helpers behind the theme state.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate browser concerns (storage, media queries, DOM
//! classes, storage events) from the reactive context so resolution and
//! synchronization can be tested against an in-memory host.

pub mod broadcast;
pub mod dark_mode;
pub mod host;
pub mod memory_host;
