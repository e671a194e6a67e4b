//! Portfolio content: the immutable tables rendered into page sections.

mod profile;
mod project;
mod resume;

pub use profile::{Assets, ContactLinks, Profile, ProfileBuilder};
pub use project::Project;
pub use resume::{EducationEntry, ExperienceEntry, SkillGroup};

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, ValidationError};

/// Everything the page displays, defined once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub profile: Profile,
    pub skills: Vec<SkillGroup>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<Project>,
    pub assets: Assets,
}

impl Content {
    /// Check content invariants.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Validation`] on an empty profile name, an entry
    /// with an empty title, or a link with an unsupported scheme.
    pub fn validate(&self) -> Result<(), FolioError> {
        self.profile.validate()?;
        check_titles("skills", self.skills.iter().map(|g| g.title.as_str()))?;
        check_titles(
            "experience",
            self.experience.iter().map(|e| e.title.as_str()),
        )?;
        check_titles(
            "education",
            self.education.iter().map(|e| e.degree.as_str()),
        )?;
        check_titles("projects", self.projects.iter().map(|p| p.title.as_str()))?;
        for project in &self.projects {
            check_link(&project.repository)?;
        }
        Ok(())
    }
}

fn check_titles<'a>(
    section: &'static str,
    titles: impl Iterator<Item = &'a str>,
) -> Result<(), ValidationError> {
    for (index, title) in titles.enumerate() {
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle { section, index });
        }
    }
    Ok(())
}

pub(crate) fn check_link(url: &str) -> Result<(), ValidationError> {
    const SCHEMES: [&str; 3] = ["https://", "http://", "mailto:"];
    if SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
        Ok(())
    } else {
        Err(ValidationError::UnsupportedLink {
            url: url.to_string(),
        })
    }
}
