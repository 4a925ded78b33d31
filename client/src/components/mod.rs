//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read preference state from the Leptos context installed by
//! `AccessibilityProvider` and request changes through it.

pub mod accessibility_controls;
pub mod accessibility_provider;
pub mod meme_card;
