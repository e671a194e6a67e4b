//! Browser adapter: the portfolio page as a Leptos CSR app.
//!
//! Implements the storage, document, network and viewport ports with
//! `web-sys`/`gloo-net`, and draws the model produced by
//! [`folio_app::render`].

use folio_app::controller::PageController;
use folio_app::render::{self, PageView};
use folio_app::services::probe::BackendProbe;
use folio_app::services::reveal::ScrollReveal;
use folio_domain::section::{RevealThreshold, SectionId};
use leptos::prelude::*;
use leptos::task::spawn_local;

pub mod api;
mod components;
pub mod reveal;
pub mod storage;

use api::GlooHealthEndpoint;
use components::{Section, StatusBadge, ThemeToggle};
use reveal::{IntersectionWatcher, ObserverHandle};
use storage::{HtmlDocumentRoot, LocalStorageThemeStore};

type Controller = PageController<LocalStorageThemeStore, HtmlDocumentRoot>;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    let content = folio_app::content::portfolio();

    let controller: Controller = PageController::mount(LocalStorageThemeStore, HtmlDocumentRoot);
    let mut updates = controller.subscribe();
    let (state, set_state) = signal(controller.snapshot());
    let controller = StoredValue::new_local(controller);

    // Ends once the controller, and with it the sender, is dropped.
    spawn_local(async move {
        while updates.changed().await.is_ok() {
            let next = updates.borrow_and_update().clone();
            set_state.set(next);
        }
    });

    spawn_local(async move {
        let status = BackendProbe::new(GlooHealthEndpoint::default()).run().await;
        controller.try_with_value(|page| page.settle_backend(status));
    });

    let scroll_reveal = StoredValue::new_local(None::<ScrollReveal<ObserverHandle>>);
    Effect::new(move |_| {
        let mounted = ScrollReveal::mount(
            &IntersectionWatcher,
            &SectionId::ALL,
            RevealThreshold::DEFAULT,
            move |section| {
                controller.try_with_value(|page| page.reveal(section));
            },
        );
        scroll_reveal.set_value(Some(mounted));
    });
    on_cleanup(move || {
        scroll_reveal.try_update_value(|reveal| {
            if let Some(reveal) = reveal.as_mut() {
                reveal.unmount();
            }
        });
    });

    let page: Memo<PageView<'static>> = Memo::new(move |_| render::page(&state.read(), content));
    let theme = Signal::derive(move || page.with(|p| p.theme));
    let status = Signal::derive(move || page.with(|p| p.status.clone()));
    let on_toggle = Callback::new(move |()| {
        controller.update_value(|page| {
            page.toggle_theme();
        });
    });

    let profile = &content.profile;
    let sections = page
        .with_untracked(|p| p.sections.clone())
        .into_iter()
        .map(|section| {
            let id = section.id;
            let visible = Signal::derive(move || {
                page.with(|p| p.section(id).is_some_and(|s| s.visible))
            });
            view! { <Section id=id body=section.body visible=visible/> }
        })
        .collect_view();

    view! {
        <header class="site-header">
            <div>
                <h1>{profile.name.as_str()}</h1>
                <p class="role">{profile.role.as_str()}</p>
            </div>
            <nav>
                {SectionId::ALL
                    .into_iter()
                    .map(|id| view! { <a href=format!("#{}", id.anchor())>{id.heading()}</a> })
                    .collect_view()}
            </nav>
            <ThemeToggle theme=theme on_toggle=on_toggle/>
        </header>
        <main>
            <StatusBadge status=status/>
            {sections}
        </main>
        <footer>
            <p>{format!("\u{00A9} {}", profile.name)}</p>
        </footer>
    }
}
