//! Accessibility preference values: font size scale and color theme.
//!
//! DESIGN
//! ======
//! Both enums carry their storage literal (`as_str`) and accept only an
//! exact literal back (`parse`), so anything read from durable storage is
//! either a valid variant or rejected. `PreferenceState` is `Copy` and is
//! always fully populated; consumers only ever see snapshots of it.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

/// Text scale applied to the whole page, ordered from smallest to largest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl FontSize {
    /// Every size, in ascending visual scale.
    pub const ALL: [Self; 4] = [Self::Small, Self::Medium, Self::Large, Self::ExtraLarge];

    /// Literal used in storage and CSS class names.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::ExtraLarge => "extra-large",
        }
    }

    /// Parse an exact storage literal. Case and whitespace must match.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.as_str() == raw)
    }

    /// Human-readable name shown in the page footer.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "Pequena",
            Self::Medium => "Média",
            Self::Large => "Grande",
            Self::ExtraLarge => "Extra Grande",
        }
    }

    /// One step up the scale, saturating at `ExtraLarge`.
    #[must_use]
    pub fn larger(self) -> Self {
        match self {
            Self::Small => Self::Medium,
            Self::Medium => Self::Large,
            Self::Large | Self::ExtraLarge => Self::ExtraLarge,
        }
    }

    /// One step down the scale, saturating at `Small`.
    #[must_use]
    pub fn smaller(self) -> Self {
        match self {
            Self::ExtraLarge => Self::Large,
            Self::Large => Self::Medium,
            Self::Medium | Self::Small => Self::Small,
        }
    }

    #[must_use]
    pub fn is_largest(self) -> bool {
        self == Self::ExtraLarge
    }

    #[must_use]
    pub fn is_smallest(self) -> bool {
        self == Self::Small
    }
}

/// Color theme. Variants are mutually exclusive and carry no ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    HighContrast,
}

impl Theme {
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::HighContrast];

    /// Literal used in storage and CSS class names.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::HighContrast => "high-contrast",
        }
    }

    /// Parse an exact storage literal. Case and whitespace must match.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|theme| theme.as_str() == raw)
    }

    /// Human-readable name for status text and buttons.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Claro",
            Self::Dark => "Escuro",
            Self::HighContrast => "Alto Contraste",
        }
    }

    /// Accessible description for the button that activates this theme.
    #[must_use]
    pub fn activate_label(self) -> &'static str {
        match self {
            Self::Light => "Ativar tema claro",
            Self::Dark => "Ativar tema escuro",
            Self::HighContrast => "Ativar tema de alto contraste",
        }
    }
}

/// The complete set of accessibility preferences at one point in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PreferenceState {
    pub font_size: FontSize,
    pub theme: Theme,
}

impl PreferenceState {
    #[must_use]
    pub fn new(font_size: FontSize, theme: Theme) -> Self {
        Self { font_size, theme }
    }

    /// Joint CSS scope class, e.g. `font-size-large theme-dark`.
    ///
    /// All visual styling keys off this class on the provider's wrapper.
    #[must_use]
    pub fn scope_class(&self) -> String {
        format!("font-size-{} theme-{}", self.font_size.as_str(), self.theme.as_str())
    }
}
