//! Seed record shapes as they appear in the registry JSON.
//!
//! Seed records carry no identifiers; stores assign ids when the records are
//! inserted.

use serde::Deserialize;

/// A project entry awaiting insertion.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectSeed {
    /// Project title.
    pub title: String,
    /// Short description shown on the project card.
    pub description: String,
    /// Image reference (URL) for the card artwork.
    pub image_url: String,
    /// Ordered technology tags.
    pub tech_stack: Vec<String>,
    /// Optional source repository link.
    #[serde(default)]
    pub github_url: Option<String>,
    /// Optional live demo link.
    #[serde(default)]
    pub live_demo_url: Option<String>,
    /// Whether the project is highlighted.
    #[serde(default)]
    pub featured: bool,
}

/// An experience timeline entry awaiting insertion.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExperienceSeed {
    /// Employer or organisation.
    pub company: String,
    /// Role held.
    pub role: String,
    /// Free-text period, e.g. `2022 - Present`.
    pub period: String,
    /// Description of the work.
    pub description: String,
}

/// An achievement entry awaiting insertion.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AchievementSeed {
    /// Achievement title.
    pub title: String,
    /// Description of the achievement.
    pub description: String,
    /// Free-text year or date label.
    pub year: String,
    /// Optional external link.
    #[serde(default)]
    pub link: Option<String>,
}
