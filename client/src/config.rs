//! Preference store configuration: storage keys and startup defaults.

use serde::Deserialize;

use crate::state::preferences::PreferenceState;

/// Storage key holding the font size literal.
pub const FONT_SIZE_KEY: &str = "accessibility-font-size";
/// Storage key holding the theme literal.
pub const THEME_KEY: &str = "accessibility-theme";

/// Where the store persists its values and what it starts from.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PreferenceConfig {
    pub font_size_key: String,
    pub theme_key: String,
    pub defaults: PreferenceState,
}

impl Default for PreferenceConfig {
    fn default() -> Self {
        Self {
            font_size_key: FONT_SIZE_KEY.to_owned(),
            theme_key: THEME_KEY.to_owned(),
            defaults: PreferenceState::default(),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
