//! Skills, work history and education.

use serde::{Deserialize, Serialize};

/// A titled group of skill labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub skills: Vec<String>,
}

impl SkillGroup {
    #[must_use]
    pub fn new<I, S>(title: impl Into<String>, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            skills: skills.into_iter().map(Into::into).collect(),
        }
    }
}

/// One position held, most recent first in the content table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub employer: String,
    pub location: String,
    pub period: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub location: String,
    pub period: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_skill_order() {
        let group = SkillGroup::new("IaC", ["Terraform", "Ansible", "Pulumi"]);
        assert_eq!(group.skills, ["Terraform", "Ansible", "Pulumi"]);
    }
}
