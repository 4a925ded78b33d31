//! Error type shared by the preference store, its storage backends, and the
//! context lookup helpers.

/// Failure conditions of the accessibility preference layer.
///
/// Only [`PreferenceError::NotInitialized`] ever reaches a caller as a hard
/// failure; the storage variants are absorbed by the store and logged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PreferenceError {
    /// Durable storage could not be read or written (absent, disabled,
    /// quota exceeded, or running outside a browser).
    #[error("preference storage unavailable: {0}")]
    StorageUnavailable(String),
    /// A stored string did not match any literal of its enum.
    #[error("invalid persisted value {value:?} for key {key:?}")]
    InvalidPersistedValue { key: String, value: String },
    /// Preference capabilities were requested with no provider mounted above
    /// the caller.
    #[error("accessibility preferences used outside of AccessibilityProvider")]
    NotInitialized,
}
