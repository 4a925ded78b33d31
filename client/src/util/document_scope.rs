//! Mirror accessibility preferences onto the `<html>` element.
//!
//! Sets `data-font-size` and `data-theme` on the document element so page
//! chrome outside the provider's wrapper (body background, scrollbars) can
//! follow the active theme. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! This is best-effort browser-only behavior; SSR and native test builds
//! no-op so server rendering stays deterministic.

use crate::state::preferences::PreferenceState;

#[cfg(test)]
#[path = "document_scope_test.rs"]
mod document_scope_test;

/// Attribute carrying the font size literal.
pub const FONT_SIZE_ATTR: &str = "data-font-size";
/// Attribute carrying the theme literal.
pub const THEME_ATTR: &str = "data-theme";

/// Attribute pairs written for `state`.
#[must_use]
pub fn attributes(state: PreferenceState) -> [(&'static str, &'static str); 2] {
    [(FONT_SIZE_ATTR, state.font_size.as_str()), (THEME_ATTR, state.theme.as_str())]
}

/// Apply the `data-*` attributes for `state` on the `<html>` element.
pub fn apply(state: PreferenceState) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        else {
            return;
        };
        for (name, value) in attributes(state) {
            if let Err(err) = el.set_attribute(name, value) {
                log::warn!("failed to set {name} on document element: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::trace!("document scope not applied outside browser: {}", state.scope_class());
    }
}
