//! Renderer: a pure function from UI state and static content to the page
//! model the view layer draws.
//!
//! There is no diffing here. The whole model is rebuilt on every change and
//! the reactive view layer decides what actually touches the DOM.

use folio_domain::content::{
    Assets, ContactLinks, Content, EducationEntry, ExperienceEntry, Profile, Project, SkillGroup,
};
use folio_domain::section::SectionId;
use folio_domain::status::BackendStatus;
use folio_domain::theme::Theme;
use folio_domain::ui_state::UiState;

/// Visual tone of the connectivity badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Pending,
    Ok,
    Error,
}

impl StatusTone {
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Pending => "status pending",
            Self::Ok => "status ok",
            Self::Error => "status fail",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub tone: StatusTone,
    pub headline: &'static str,
    pub detail: String,
}

/// Body of a section, borrowing straight from the content tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionBody<'a> {
    About(&'a Profile, &'a Assets),
    Skills(&'a [SkillGroup]),
    Experience(&'a [ExperienceEntry]),
    Education(&'a [EducationEntry]),
    Projects(&'a [Project]),
    Contact(&'a ContactLinks, &'a Assets),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView<'a> {
    pub id: SectionId,
    pub visible: bool,
    pub body: SectionBody<'a>,
}

impl SectionView<'_> {
    #[must_use]
    pub fn class_name(&self) -> &'static str {
        reveal_class(self.visible)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a> {
    pub theme: Theme,
    pub status: StatusView,
    pub sections: Vec<SectionView<'a>>,
}

impl<'a> PageView<'a> {
    #[must_use]
    pub fn section(&self, id: SectionId) -> Option<&SectionView<'a>> {
        self.sections.iter().find(|s| s.id == id)
    }
}

/// Build the full page model.
#[must_use]
pub fn page<'a>(state: &UiState, content: &'a Content) -> PageView<'a> {
    let sections = SectionId::ALL
        .into_iter()
        .map(|id| SectionView {
            id,
            visible: state.is_visible(id),
            body: body(id, content),
        })
        .collect();

    PageView {
        theme: state.theme,
        status: status(&state.backend_status),
        sections,
    }
}

/// Connectivity badge for a backend status.
#[must_use]
pub fn status(status: &BackendStatus) -> StatusView {
    match status {
        BackendStatus::Unknown => StatusView {
            tone: StatusTone::Pending,
            headline: "Checking backend\u{2026}",
            detail: "Checking...".to_string(),
        },
        BackendStatus::Ok(message) => StatusView {
            tone: StatusTone::Ok,
            headline: "Backend Connected",
            detail: format!("API says: {message}"),
        },
        BackendStatus::Error(reason) => StatusView {
            tone: StatusTone::Error,
            headline: "Backend Unavailable",
            detail: format!("Error: {reason}"),
        },
    }
}

/// Class list for a reveal-tagged element.
#[must_use]
pub fn reveal_class(visible: bool) -> &'static str {
    if visible { "reveal visible" } else { "reveal" }
}

/// Label for the theme toggle: the icon of the theme a click switches to.
#[must_use]
pub fn theme_toggle_label(theme: Theme) -> &'static str {
    if theme.is_dark() { "\u{2600}" } else { "\u{263E}" }
}

fn body(id: SectionId, content: &Content) -> SectionBody<'_> {
    match id {
        SectionId::About => SectionBody::About(&content.profile, &content.assets),
        SectionId::Skills => SectionBody::Skills(&content.skills),
        SectionId::Experience => SectionBody::Experience(&content.experience),
        SectionId::Education => SectionBody::Education(&content.education),
        SectionId::Projects => SectionBody::Projects(&content.projects),
        SectionId::Contact => SectionBody::Contact(&content.profile.contact, &content.assets),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::portfolio;

    #[test]
    fn should_render_sections_in_fixed_order() {
        let view = page(&UiState::default(), portfolio());
        let ids: Vec<_> = view.sections.iter().map(|s| s.id).collect();
        assert_eq!(ids, SectionId::ALL);
    }

    #[test]
    fn should_hide_sections_until_revealed() {
        let mut state = UiState::default();
        state.visible_sections.reveal(SectionId::Projects);

        let view = page(&state, portfolio());
        let projects = view.section(SectionId::Projects).unwrap();
        let skills = view.section(SectionId::Skills).unwrap();

        assert_eq!(projects.class_name(), "reveal visible");
        assert_eq!(skills.class_name(), "reveal");
    }

    #[test]
    fn should_borrow_content_tables_without_reordering() {
        let content = portfolio();
        let view = page(&UiState::default(), content);
        match view.section(SectionId::Experience).unwrap().body {
            SectionBody::Experience(entries) => assert_eq!(entries, content.experience.as_slice()),
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn should_render_pending_status_before_probe_settles() {
        let view = status(&BackendStatus::Unknown);
        assert_eq!(view.tone, StatusTone::Pending);
        assert_eq!(view.detail, "Checking...");
    }

    #[test]
    fn should_render_ok_status_with_message() {
        let view = status(&BackendStatus::Ok("Connected".to_string()));
        assert_eq!(view.tone, StatusTone::Ok);
        assert_eq!(view.headline, "Backend Connected");
        assert!(view.detail.contains("Connected"));
    }

    #[test]
    fn should_render_error_status_with_reason() {
        let view = status(&BackendStatus::Error("API 503".to_string()));
        assert_eq!(view.tone, StatusTone::Error);
        assert_eq!(view.headline, "Backend Unavailable");
        assert_eq!(view.detail, "Error: API 503");
        assert_eq!(view.tone.class_name(), "status fail");
    }

    #[test]
    fn should_carry_theme_into_page_model() {
        let view = page(&UiState::with_theme(Theme::Dark), portfolio());
        assert_eq!(view.theme, Theme::Dark);
        assert_eq!(theme_toggle_label(view.theme), "\u{2600}");
    }
}
