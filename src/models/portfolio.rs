//! Portfolio dataset types.
//!
//! Field names mirror the backing store documents exactly (`githubLink`,
//! `uiportfilio`, ...) so the same JSON shape round-trips through the
//! content provider, the fallback asset, and the upload utility.

use serde::{Deserialize, Serialize};

/// The full dataset driving the virtual filesystem content.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PortfolioData {
    #[serde(default)]
    pub bio: Bio,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
}

impl PortfolioData {
    /// Replace any section the remote store left empty with the
    /// corresponding section of the built-in dataset.
    pub fn merged_with(mut self, fallback: PortfolioData) -> Self {
        if self.bio.name.is_empty() {
            self.bio = fallback.bio;
        }
        if self.projects.is_empty() {
            self.projects = fallback.projects;
        }
        if self.certifications.is_empty() {
            self.certifications = fallback.certifications;
        }
        if self.contact.email.is_empty() {
            self.contact = fallback.contact;
        }
        if self.experiences.is_empty() {
            self.experiences = fallback.experiences;
        }
        if self.education.is_empty() {
            self.education = fallback.education;
        }
        self
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Bio {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(rename = "githubLink", default)]
    pub github_link: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub email: String,
    /// Link to the graphical portfolio, opened by the `gui` executable.
    /// The store keeps the historical field name.
    #[serde(rename = "uiportfilio", default)]
    pub ui_portfolio: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub twitter: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub tasks: Vec<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub period: String,
}
