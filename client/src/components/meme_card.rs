//! Gallery card for a single meme.

use leptos::prelude::*;

use crate::state::memes::{FALLBACK_ALT, FALLBACK_SRC, Meme};

#[cfg(test)]
#[path = "meme_card_test.rs"]
mod meme_card_test;

/// Titled image card. A failed image load swaps in the placeholder once.
#[component]
pub fn MemeCard(meme: Meme) -> impl IntoView {
    let image = RwSignal::new((meme.src, meme.alt));
    let labelled_by = meme.title_id();
    let title_id = meme.title_id();

    let on_error = move |_| {
        if let Some(next) = fallback_for(image.get_untracked().0) {
            image.set(next);
        }
    };

    view! {
        <article class="gallery-item" role="img" aria-labelledby=labelled_by>
            <div class="gallery-item__body">
                <h2 id=title_id class="gallery-item__title">
                    {meme.title}
                </h2>
                <img
                    class="gallery-item__image"
                    src=move || image.get().0
                    alt=move || image.get().1
                    loading="lazy"
                    on:error=on_error
                />
            </div>
        </article>
    }
}

/// Replacement image for a failed `current` source, `None` once the
/// placeholder itself is showing.
pub(crate) fn fallback_for(current: &str) -> Option<(&'static str, &'static str)> {
    (current != FALLBACK_SRC).then_some((FALLBACK_SRC, FALLBACK_ALT))
}
