//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::accessibility_provider::AccessibilityProvider;
use crate::pages::gallery::GalleryPage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Mounts the accessibility provider around the gallery page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/meme-gallery.css"/>
        <Title text="Galeria de Memes - Site Acessível"/>
        <Meta
            name="description"
            content="Uma galeria de memes com funcionalidades de acessibilidade para ajustar tamanho da fonte e temas de cores"
        />

        <AccessibilityProvider>
            <GalleryPage/>
        </AccessibilityProvider>
    }
}
