//! Accessibility preference store: the single owner of `PreferenceState`.
//!
//! DESIGN
//! ======
//! The store validates every transition, writes the result through to
//! durable storage, and then republishes the new snapshot to its
//! subscribers. It has no dependency on Leptos; the provider in
//! `components::accessibility_provider` bridges it into a signal.
//!
//! Storage problems never escape: loading falls back to defaults, and a
//! failed write still leaves the in-memory mutation in effect. The outcome
//! of each operation is reported in the returned [`Update`].

use std::fmt;

use crate::config::PreferenceConfig;
use crate::error::PreferenceError;
use crate::state::preferences::{FontSize, PreferenceState, Theme};
use crate::util::storage::PreferenceStorage;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

/// Callback invoked with each republished snapshot.
pub type Subscriber = Box<dyn Fn(&PreferenceState) + Send + Sync>;

/// Handle returned by [`PreferenceStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Whether an operation wrote its result to durable storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Persistence {
    /// Nothing changed, nothing was written.
    Skipped,
    /// Both keys now hold the in-memory values.
    Written,
    /// The write failed; the in-memory state was updated regardless.
    Failed(PreferenceError),
}

/// Result of a store operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Update {
    /// State after the operation.
    pub snapshot: PreferenceState,
    /// Whether the operation produced a different state.
    pub changed: bool,
    /// Outcome of the write-through to durable storage.
    pub persistence: Persistence,
}

/// Owns the canonical preferences and keeps storage and subscribers in sync.
pub struct PreferenceStore<S> {
    storage: S,
    config: PreferenceConfig,
    state: PreferenceState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<S: PreferenceStorage> PreferenceStore<S> {
    /// Create a store holding the configured defaults. Storage is untouched
    /// until [`restore`](Self::restore) or the first mutation.
    pub fn new(storage: S, config: PreferenceConfig) -> Self {
        Self {
            storage,
            state: config.defaults,
            config,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Create a store and immediately restore persisted values.
    pub fn load(storage: S, config: PreferenceConfig) -> Self {
        let mut store = Self::new(storage, config);
        store.restore();
        store
    }

    /// Current preferences.
    pub fn snapshot(&self) -> PreferenceState {
        self.state
    }

    /// Reset to defaults, apply any valid persisted values, then write the
    /// effective values back and republish.
    ///
    /// Invalid stored literals are ignored. If storage cannot be read at all
    /// the defaults stand.
    pub fn restore(&mut self) -> Update {
        let next = match self.load_persisted() {
            Ok(state) => state,
            Err(err) => {
                log::warn!("failed to load accessibility preferences, using defaults: {err}");
                self.config.defaults
            }
        };
        self.commit(next)
    }

    /// Step the font size up one level. No-op at `ExtraLarge`.
    pub fn increase_font_size(&mut self) -> Update {
        let current = self.state.font_size;
        if current.is_largest() {
            return self.unchanged();
        }
        self.commit(PreferenceState { font_size: current.larger(), ..self.state })
    }

    /// Step the font size down one level. No-op at `Small`.
    pub fn decrease_font_size(&mut self) -> Update {
        let current = self.state.font_size;
        if current.is_smallest() {
            return self.unchanged();
        }
        self.commit(PreferenceState { font_size: current.smaller(), ..self.state })
    }

    /// Select `theme`. Re-selecting the active theme still persists and
    /// republishes.
    pub fn set_theme(&mut self, theme: Theme) -> Update {
        self.commit(PreferenceState { theme, ..self.state })
    }

    /// Register `subscriber` for every future republish.
    pub fn subscribe(&mut self, subscriber: impl Fn(&PreferenceState) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscriber. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    fn load_persisted(&self) -> Result<PreferenceState, PreferenceError> {
        let mut state = self.config.defaults;
        if let Some(font_size) = self.read_literal(&self.config.font_size_key, FontSize::parse)? {
            state.font_size = font_size;
        }
        if let Some(theme) = self.read_literal(&self.config.theme_key, Theme::parse)? {
            state.theme = theme;
        }
        Ok(state)
    }

    /// Read and parse one key. Storage failures propagate; unknown literals
    /// are dropped.
    fn read_literal<T>(&self, key: &str, parse: fn(&str) -> Option<T>) -> Result<Option<T>, PreferenceError> {
        let Some(raw) = self.storage.get(key)? else {
            return Ok(None);
        };
        let parsed = parse(&raw);
        if parsed.is_none() {
            let err = PreferenceError::InvalidPersistedValue { key: key.to_owned(), value: raw };
            log::debug!("{err}; keeping default");
        }
        Ok(parsed)
    }

    fn commit(&mut self, next: PreferenceState) -> Update {
        let changed = next != self.state;
        self.state = next;
        let persistence = self.persist();
        self.publish();
        Update { snapshot: self.state, changed, persistence }
    }

    fn unchanged(&self) -> Update {
        Update { snapshot: self.state, changed: false, persistence: Persistence::Skipped }
    }

    fn persist(&self) -> Persistence {
        let result = self
            .storage
            .set(&self.config.font_size_key, self.state.font_size.as_str())
            .and_then(|()| self.storage.set(&self.config.theme_key, self.state.theme.as_str()));
        match result {
            Ok(()) => Persistence::Written,
            Err(err) => {
                log::warn!("failed to save accessibility preferences: {err}");
                Persistence::Failed(err)
            }
        }
    }

    fn publish(&self) {
        for (_, subscriber) in &self.subscribers {
            subscriber(&self.state);
        }
    }
}

impl<S> fmt::Debug for PreferenceStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}
