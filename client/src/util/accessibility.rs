//! Leptos context wiring for the accessibility preference store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AccessibilityProvider` creates one [`AccessibilityContext`] and provides
//! it to every descendant. The context owns the store inside a
//! `StoredValue` and subscribes a signal setter to it, so each store
//! republish becomes a reactive update for all consumers.

use leptos::prelude::*;

use crate::config::PreferenceConfig;
use crate::error::PreferenceError;
use crate::state::preferences::{FontSize, PreferenceState, Theme};
use crate::state::store::{PreferenceStore, Update};
use crate::util::storage::BrowserStorage;

#[cfg(test)]
#[path = "accessibility_test.rs"]
mod accessibility_test;

/// Capability handle handed to preference consumers.
///
/// Reads are reactive snapshots; mutations go through the store.
#[derive(Clone, Copy)]
pub struct AccessibilityContext {
    state: ReadSignal<PreferenceState>,
    store: StoredValue<PreferenceStore<BrowserStorage>>,
}

impl AccessibilityContext {
    /// Build a store over browser storage holding the configured defaults.
    ///
    /// Persisted values are not read here; call [`restore`](Self::restore)
    /// once the component has mounted so hydration matches the server markup.
    pub fn new(config: PreferenceConfig) -> Self {
        let (state, set_state) = signal(config.defaults);
        let mut store = PreferenceStore::new(BrowserStorage, config);
        store.subscribe(move |snapshot| set_state.set(*snapshot));
        Self { state, store: StoredValue::new(store) }
    }

    /// Reactive read of the current preferences.
    pub fn state(&self) -> PreferenceState {
        self.state.get()
    }

    pub fn font_size(&self) -> FontSize {
        self.state().font_size
    }

    pub fn theme(&self) -> Theme {
        self.state().theme
    }

    /// Underlying read signal, for consumers that derive their own views.
    pub fn signal(&self) -> ReadSignal<PreferenceState> {
        self.state
    }

    /// Load persisted preferences into the store.
    pub fn restore(&self) {
        self.run("restore", PreferenceStore::restore);
    }

    pub fn increase_font_size(&self) {
        self.run("increase_font_size", PreferenceStore::increase_font_size);
    }

    pub fn decrease_font_size(&self) {
        self.run("decrease_font_size", PreferenceStore::decrease_font_size);
    }

    pub fn set_theme(&self, theme: Theme) {
        self.run("set_theme", |store| store.set_theme(theme));
    }

    fn run(&self, op: &str, apply: impl FnOnce(&mut PreferenceStore<BrowserStorage>) -> Update) {
        self.store.update_value(|store| {
            let update = apply(store);
            log::debug!(
                "{op}: {} (changed: {}, persistence: {:?})",
                update.snapshot.scope_class(),
                update.changed,
                update.persistence
            );
        });
    }
}

/// Create the accessibility context and provide it to descendants.
pub fn provide_accessibility(config: PreferenceConfig) -> AccessibilityContext {
    let ctx = AccessibilityContext::new(config);
    provide_context(ctx);
    ctx
}

/// Look up the accessibility context, reporting a missing provider.
pub fn try_use_accessibility() -> Result<AccessibilityContext, PreferenceError> {
    use_context::<AccessibilityContext>().ok_or(PreferenceError::NotInitialized)
}

/// Look up the accessibility context.
///
/// A missing provider is a composition bug, so this aborts component
/// construction instead of degrading.
pub fn use_accessibility() -> AccessibilityContext {
    expect_context::<AccessibilityContext>()
}
