//! UI state: the only mutable data on the page.

use serde::{Deserialize, Serialize};

use crate::section::{RevealSet, SectionId};
use crate::status::BackendStatus;
use crate::theme::Theme;

/// State owned by the page controller. Each field has exactly one writer:
/// the theme synchroniser, the backend probe, and the reveal watcher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    pub theme: Theme,
    pub backend_status: BackendStatus,
    pub visible_sections: RevealSet,
}

impl UiState {
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_visible(&self, section: SectionId) -> bool {
        self.visible_sections.is_visible(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_light_unknown_and_hidden() {
        let state = UiState::default();
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(state.backend_status, BackendStatus::Unknown);
        assert!(SectionId::ALL.iter().all(|s| !state.is_visible(*s)));
    }

    #[test]
    fn should_carry_initial_theme() {
        assert_eq!(UiState::with_theme(Theme::Dark).theme, Theme::Dark);
    }
}
