//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `preferences` holds the value types, `store` owns and mutates them, and
//! `memes` is the static gallery content. None of these depend on Leptos.

pub mod memes;
pub mod preferences;
pub mod store;
