//! Theme state and the context handle shared with descendant components.
//!
//! DESIGN
//! ======
//! `theme` holds the plain domain value; `context` wraps it in reactive
//! signals so components can depend on it without knowing about the host.

pub mod context;
pub mod theme;
