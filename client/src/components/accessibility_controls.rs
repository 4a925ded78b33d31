//! Panel of font-size and theme controls.

use leptos::prelude::*;

use crate::state::preferences::{FontSize, Theme};
use crate::util::accessibility::use_accessibility;

#[cfg(test)]
#[path = "accessibility_controls_test.rs"]
mod accessibility_controls_test;

/// Font-size step buttons plus one button per theme.
///
/// Boundary buttons are disabled at the ends of the scale and the active
/// theme's button is disabled.
#[component]
pub fn AccessibilityControls() -> impl IntoView {
    let a11y = use_accessibility();

    view! {
        <div class="accessibility-controls">
            <h3 class="accessibility-controls__title">"Controles de Acessibilidade"</h3>

            <div class="accessibility-controls__group">
                <p class="accessibility-controls__status">{move || font_size_status(a11y.font_size())}</p>
                <div class="accessibility-controls__row">
                    <button
                        class="accessibility-button"
                        aria-label="Diminuir tamanho da fonte"
                        disabled=move || a11y.font_size().is_smallest()
                        on:click=move |_| a11y.decrease_font_size()
                    >
                        "A-"
                    </button>
                    <button
                        class="accessibility-button"
                        aria-label="Aumentar tamanho da fonte"
                        disabled=move || a11y.font_size().is_largest()
                        on:click=move |_| a11y.increase_font_size()
                    >
                        "A+"
                    </button>
                </div>
            </div>

            <div class="accessibility-controls__group">
                <p class="accessibility-controls__status">{move || theme_status(a11y.theme())}</p>
                <div class="accessibility-controls__column">
                    {Theme::ALL
                        .into_iter()
                        .map(|theme| view! { <ThemeButton theme=theme/> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ThemeButton(theme: Theme) -> impl IntoView {
    let a11y = use_accessibility();
    let active = move || a11y.theme() == theme;

    view! {
        <button
            class="accessibility-button"
            class:accessibility-button--active=active
            aria-label=theme.activate_label()
            aria-pressed=move || active().to_string()
            disabled=active
            on:click=move |_| a11y.set_theme(theme)
        >
            {theme.label()}
        </button>
    }
}

pub(crate) fn font_size_status(size: FontSize) -> String {
    format!("Tamanho da Fonte: {}", size.as_str())
}

pub(crate) fn theme_status(theme: Theme) -> String {
    format!("Tema: {}", theme.label())
}
