//! Profile photo that swaps to a placeholder when the image fails to load.

use leptos::prelude::*;

#[component]
pub fn ProfilePhoto(
    #[prop(into)] src: String,
    /// Used once, after the primary image errors.
    #[prop(into)]
    fallback: String,
    #[prop(into)] alt: String,
) -> impl IntoView {
    let (current, set_current) = signal(src);
    let (failed, set_failed) = signal(false);

    let on_error = move |_| {
        // A broken fallback must not loop.
        if failed.get_untracked() {
            return;
        }
        set_failed.set(true);
        set_current.set(fallback.clone());
    };

    view! {
        <img class="profile-photo" src=move || current.get() alt=alt on:error=on_error/>
    }
}
