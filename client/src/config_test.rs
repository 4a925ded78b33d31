use super::*;
use crate::state::preferences::{FontSize, Theme};

#[test]
fn default_uses_fixed_storage_keys() {
    let cfg = PreferenceConfig::default();
    assert_eq!(cfg.font_size_key, "accessibility-font-size");
    assert_eq!(cfg.theme_key, "accessibility-theme");
    assert_eq!(cfg.defaults, PreferenceState::new(FontSize::Medium, Theme::Light));
}

#[test]
fn deserialize_fills_missing_fields_from_default() {
    let cfg: PreferenceConfig = serde_json::from_str(r#"{"theme_key":"a11y-theme"}"#).unwrap();
    assert_eq!(cfg.theme_key, "a11y-theme");
    assert_eq!(cfg.font_size_key, FONT_SIZE_KEY);
    assert_eq!(cfg.defaults, PreferenceState::default());
}

#[test]
fn deserialize_reads_defaults_as_storage_literals() {
    let cfg: PreferenceConfig =
        serde_json::from_str(r#"{"defaults":{"font_size":"extra-large","theme":"high-contrast"}}"#).unwrap();
    assert_eq!(cfg.defaults, PreferenceState::new(FontSize::ExtraLarge, Theme::HighContrast));
}
