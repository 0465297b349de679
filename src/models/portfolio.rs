//! Portfolio content deserialized from the bundled TOML document.

use serde::Deserialize;

use crate::config::PORTFOLIO_TOML;
use crate::core::error::ContentError;

/// Everything the content panels render.
#[derive(Clone, Debug, Deserialize)]
pub struct Portfolio {
    pub owner: Owner,
    pub about: About,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub education: Education,
    pub contact: ContactCopy,
}

impl Portfolio {
    /// Parse a portfolio document.
    pub fn from_toml(source: &str) -> Result<Self, ContentError> {
        let portfolio: Self = toml::from_str(source)?;
        portfolio.check_titles()?;
        Ok(portfolio)
    }

    /// Parse the portfolio compiled into the binary.
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_toml(PORTFOLIO_TOML)
    }

    fn check_titles(&self) -> Result<(), ContentError> {
        if let Some(index) = self.experience.iter().position(|e| e.title.trim().is_empty()) {
            return Err(ContentError::EmptyTitle {
                kind: "experience",
                index,
            });
        }
        if let Some(index) = self.projects.iter().position(|p| p.title.trim().is_empty()) {
            return Err(ContentError::EmptyTitle {
                kind: "project",
                index,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Owner {
    pub name: String,
    pub headline: String,
    pub location: String,
    pub status: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub resume: String,
    pub portrait: String,
    pub banner: String,
}

impl Owner {
    /// First word of the owner's name, used in greetings.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Leading letter shown when the intro collapses.
    pub fn monogram(&self) -> String {
        self.name.chars().take(1).collect()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct About {
    pub skill_groups: Vec<SkillGroup>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Skill {
    pub name: String,
    pub icon: String,
    /// Proficiency bar fill, 0-100.
    pub progress: u8,
    pub level: String,
}

impl Skill {
    /// Bar width clamped to a valid percentage.
    pub fn percent(&self) -> u8 {
        self.progress.min(100)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub kind: String,
    pub description: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub link: Option<String>,
}

impl Experience {
    /// Internships get a graduation-cap badge instead of a briefcase.
    pub fn is_internship(&self) -> bool {
        self.kind.to_lowercase().contains("internship")
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub long_description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    pub image: String,
    /// "% Match" badge value.
    pub match_score: u8,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Education {
    pub institution: String,
    pub school: String,
    pub badge: String,
    pub degree: String,
    pub minor: Option<String>,
    pub location: String,
    pub period: String,
    #[serde(default)]
    pub courses: Vec<Course>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Course {
    pub code: String,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ContactCopy {
    pub intro: String,
    pub location: String,
    #[serde(default)]
    pub looking_for: Vec<String>,
    pub recruiter_note: String,
    pub collaborator_note: String,
    pub general_note: String,
}
