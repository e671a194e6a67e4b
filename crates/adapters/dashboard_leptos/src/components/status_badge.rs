//! Backend connectivity badge.

use folio_app::render::StatusView;
use leptos::prelude::*;

#[component]
pub fn StatusBadge(#[prop(into)] status: Signal<StatusView>) -> impl IntoView {
    view! {
        <div class=move || status.with(|s| s.tone.class_name()) role="status">
            <strong>{move || status.with(|s| s.headline)}</strong>
            <span class="status-detail">{move || status.with(|s| s.detail.clone())}</span>
        </div>
    }
}
