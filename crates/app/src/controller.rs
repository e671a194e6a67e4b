//! Page controller: sole owner of [`UiState`].
//!
//! The three writers (theme toggle, backend probe, reveal watcher) go through
//! this type; every accepted change is published on a `watch` channel whose
//! only consumer is the renderer.

use tokio::sync::watch;

use folio_domain::section::SectionId;
use folio_domain::status::BackendStatus;
use folio_domain::theme::Theme;
use folio_domain::ui_state::UiState;

use crate::ports::{DocumentRoot, ThemeStore};
use crate::services::theme::ThemeSynchronizer;

pub struct PageController<S, D> {
    theme: ThemeSynchronizer<S, D>,
    state: watch::Sender<UiState>,
}

impl<S: ThemeStore, D: DocumentRoot> PageController<S, D> {
    /// Resolve the initial theme and create the state channel.
    ///
    /// The backend status starts `Unknown` and no section is visible.
    pub fn mount(store: S, document: D) -> Self {
        let theme = ThemeSynchronizer::init(store, document);
        let (state, _) = watch::channel(UiState::with_theme(theme.current()));
        Self { theme, state }
    }

    /// Receive every subsequent state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn snapshot(&self) -> UiState {
        self.state.borrow().clone()
    }

    /// Flip the theme; storage, document and state agree afterwards.
    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.theme.toggle();
        self.state.send_modify(|state| state.theme = next);
        next
    }

    /// Record the probe outcome. Only the first settlement is accepted.
    pub fn settle_backend(&self, status: BackendStatus) -> bool {
        let accepted = self
            .state
            .send_if_modified(|state| state.backend_status.settle(status.clone()));
        if !accepted {
            tracing::warn!(?status, "ignoring backend status after settlement");
        }
        accepted
    }

    /// Mark `section` visible. Returns `false` when it already was.
    pub fn reveal(&self, section: SectionId) -> bool {
        let revealed = self
            .state
            .send_if_modified(|state| state.visible_sections.reveal(section));
        if revealed {
            tracing::debug!(%section, "section revealed");
        }
        revealed
    }
}
