//! Dark/light theme toggle button.

use folio_app::render;
use folio_domain::theme::Theme;
use leptos::prelude::*;

/// A toggle button showing the icon of the theme a click switches to.
#[component]
pub fn ThemeToggle(
    /// Theme currently applied to the document.
    #[prop(into)]
    theme: Signal<Theme>,
    /// Invoked on each click.
    on_toggle: Callback<()>,
) -> impl IntoView {
    let label = move || render::theme_toggle_label(theme.get());
    let title = move || {
        if theme.get().is_dark() {
            "Switch to light theme"
        } else {
            "Switch to dark theme"
        }
    };

    view! {
        <button class="theme-toggle" on:click=move |_| on_toggle.run(()) title=title>
            {label}
        </button>
    }
}
