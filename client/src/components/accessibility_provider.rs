//! Provider that owns the preference store and scopes its children.

use leptos::prelude::*;

use crate::config::PreferenceConfig;
use crate::util::accessibility::provide_accessibility;
use crate::util::document_scope;

#[cfg(test)]
#[path = "accessibility_provider_test.rs"]
mod accessibility_provider_test;

/// Provides [`AccessibilityContext`](crate::util::accessibility::AccessibilityContext)
/// and wraps `children` in a `<div>` carrying the joint
/// `font-size-* theme-*` scope class.
///
/// Persisted preferences are restored after mount, so the server shell and
/// the first client render both use the defaults.
#[component]
pub fn AccessibilityProvider(
    #[prop(optional)] config: Option<PreferenceConfig>,
    children: Children,
) -> impl IntoView {
    let a11y = provide_accessibility(config.unwrap_or_default());

    Effect::new(move || a11y.restore());
    Effect::new(move || document_scope::apply(a11y.state()));

    view! {
        <div class=move || a11y.state().scope_class()>
            {children()}
        </div>
    }
}
