//! Page sections and the one-way reveal set.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A top-level page section, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    About,
    Skills,
    Experience,
    Education,
    Projects,
    Contact,
}

impl SectionId {
    /// Every section, in the order it appears on the page.
    pub const ALL: [Self; 6] = [
        Self::About,
        Self::Skills,
        Self::Experience,
        Self::Education,
        Self::Projects,
        Self::Contact,
    ];

    /// DOM anchor id of the section element.
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Heading shown above the section.
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Education => "Education",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section {0:?}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.anchor() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Fraction of a section that must be inside the viewport before it is
/// revealed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct RevealThreshold(f64);

impl RevealThreshold {
    pub const DEFAULT: Self = Self(0.15);

    /// Browsers report a crossing at a ratio a hair below the configured
    /// threshold, so comparisons allow this much slack.
    const SLACK: f64 = 1e-3;

    /// Build a threshold, clamping into `0.0..=1.0`. `NaN` yields the default.
    #[must_use]
    pub fn new(fraction: f64) -> Self {
        if fraction.is_nan() {
            return Self::DEFAULT;
        }
        Self(fraction.clamp(0.0, 1.0))
    }

    #[must_use]
    pub fn fraction(self) -> f64 {
        self.0
    }

    /// Whether an observed intersection ratio satisfies this threshold.
    #[must_use]
    pub fn is_met(self, ratio: f64) -> bool {
        ratio > 0.0 && ratio + Self::SLACK >= self.0
    }
}

impl Default for RevealThreshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Sections that have been revealed. Grows only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealSet(BTreeSet<SectionId>);

impl RevealSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `section` visible. Returns `true` only the first time.
    pub fn reveal(&mut self, section: SectionId) -> bool {
        self.0.insert(section)
    }

    #[must_use]
    pub fn is_visible(&self, section: SectionId) -> bool {
        self.0.contains(&section)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
