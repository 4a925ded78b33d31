//! Gallery page: controls, status header, meme grid, and footer.

use leptos::prelude::*;

use crate::components::accessibility_controls::AccessibilityControls;
use crate::components::meme_card::MemeCard;
use crate::state::memes::MEMES;
use crate::state::preferences::{FontSize, Theme};
use crate::util::accessibility::use_accessibility;

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

/// The single page of the application.
#[component]
pub fn GalleryPage() -> impl IntoView {
    let a11y = use_accessibility();

    view! {
        <main class="gallery-page">
            <AccessibilityControls/>

            <div class="gallery-page__container">
                <header class="gallery-page__header">
                    <h1 class="gallery-page__title">"🎭 Galeria de Memes"</h1>
                    <p class="gallery-page__intro">
                        "Bem-vindo à nossa galeria de memes! Use os controles de acessibilidade no canto "
                        "superior direito para ajustar o tamanho da fonte e trocar entre temas de cores."
                    </p>
                    <div class="gallery-page__status" aria-live="polite">
                        <p>
                            "Fonte atual: "
                            <span class="gallery-page__value">{move || a11y.font_size().as_str()}</span>
                        </p>
                        <p>
                            "Tema atual: "
                            <span class="gallery-page__value">{move || a11y.theme().label()}</span>
                        </p>
                    </div>
                </header>

                <section class="gallery-grid" role="region" aria-label="Galeria de memes">
                    {MEMES.into_iter().map(|meme| view! { <MemeCard meme=meme/> }).collect::<Vec<_>>()}
                </section>

                <footer class="gallery-page__footer">
                    <p>
                        "Esta galeria foi desenvolvida com foco em acessibilidade. "
                        "Use os controles para personalizar sua experiência de visualização."
                    </p>
                    <div class="gallery-page__features">
                        <p>"✨ Funcionalidades de Acessibilidade:"</p>
                        <ul>
                            <li>{format!("🔤 Ajuste de tamanho da fonte ({})", font_size_labels())}</li>
                            <li>{format!("🎨 Temas de cores ({})", theme_labels())}</li>
                            <li>"📱 Design responsivo para todos os dispositivos"</li>
                            <li>"♿ Navegação por teclado e leitores de tela"</li>
                        </ul>
                    </div>
                </footer>
            </div>
        </main>
    }
}

fn font_size_labels() -> String {
    FontSize::ALL.map(FontSize::label).join(", ")
}

fn theme_labels() -> String {
    Theme::ALL.map(Theme::label).join(", ")
}
