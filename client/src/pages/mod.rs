//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The application has a single screen; the page owns layout and delegates
//! rendering details to `components`.

pub mod gallery;
