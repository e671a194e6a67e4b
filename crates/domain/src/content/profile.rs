//! Profile: who the page is about, and how to reach them.

use serde::{Deserialize, Serialize};

use super::check_link;
use crate::error::{FolioError, ValidationError};

/// Contact links shown in the header and the contact section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLinks {
    pub github: String,
    pub linkedin: String,
    /// A `mailto:` URI.
    pub email: String,
}

impl ContactLinks {
    /// `(label, href)` pairs in display order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("GitHub", self.github.as_str()),
            ("LinkedIn", self.linkedin.as_str()),
            ("Email", self.email.as_str()),
        ]
    }

    /// The email address without its `mailto:` prefix.
    #[must_use]
    pub fn email_address(&self) -> &str {
        self.email.strip_prefix("mailto:").unwrap_or(&self.email)
    }
}

/// The person the portfolio belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub location: String,
    pub introduction: String,
    pub contact: ContactLinks,
}

impl Profile {
    /// Create a builder for constructing a [`Profile`].
    #[must_use]
    pub fn builder() -> ProfileBuilder {
        ProfileBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Validation`] when `name` is empty or a contact
    /// link does not use `http`, `https` or `mailto`.
    pub fn validate(&self) -> Result<(), FolioError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        for (_, href) in self.contact.entries() {
            check_link(href)?;
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Profile`].
#[derive(Debug, Default)]
pub struct ProfileBuilder {
    name: Option<String>,
    role: Option<String>,
    location: Option<String>,
    introduction: Option<String>,
    contact: ContactLinks,
}

impl ProfileBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn introduction(mut self, introduction: impl Into<String>) -> Self {
        self.introduction = Some(introduction.into());
        self
    }

    #[must_use]
    pub fn github(mut self, url: impl Into<String>) -> Self {
        self.contact.github = url.into();
        self
    }

    #[must_use]
    pub fn linkedin(mut self, url: impl Into<String>) -> Self {
        self.contact.linkedin = url.into();
        self
    }

    #[must_use]
    pub fn email(mut self, uri: impl Into<String>) -> Self {
        self.contact.email = uri.into();
        self
    }

    /// Consume the builder, validate, and return a [`Profile`].
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Validation`] if `name` is missing or a contact
    /// link is malformed.
    pub fn build(self) -> Result<Profile, FolioError> {
        let profile = Profile {
            name: self.name.unwrap_or_default(),
            role: self.role.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            introduction: self.introduction.unwrap_or_default(),
            contact: self.contact,
        };
        profile.validate()?;
        Ok(profile)
    }
}

/// Static files referenced by the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assets {
    pub resume: String,
    pub photo: String,
    /// Substituted for [`photo`](Self::photo) when it fails to load.
    pub photo_fallback: String,
}

impl Default for Assets {
    fn default() -> Self {
        Self {
            resume: "/assets/resume.pdf".to_string(),
            photo: "/assets/profile.svg".to_string(),
            photo_fallback: "/assets/profile-fallback.svg".to_string(),
        }
    }
}
