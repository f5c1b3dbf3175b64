//! Read-only portfolio records: projects, experiences and achievements.
//!
//! These records are created once when a store is initialised from a seed
//! dataset and only ever read afterwards. Identifiers are assigned by the
//! store. Optional links serialise as `null` rather than being omitted so
//! clients can rely on a fixed shape.

use portfolio_content::{AchievementSeed, ExperienceSeed, ProjectSeed};
use serde::{Deserialize, Serialize};

/// A showcased project.
///
/// ## Invariants
/// - `id` is unique within the projects collection.
/// - `tech_stack` preserves the order the tags were declared in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Store-assigned identifier.
    pub id: i32,
    /// Display title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Cover image reference.
    pub image_url: String,
    /// Ordered technology tags.
    pub tech_stack: Vec<String>,
    /// Source repository link.
    pub github_url: Option<String>,
    /// Live demo link.
    pub live_demo_url: Option<String>,
    /// Whether the project is highlighted.
    pub featured: bool,
}

impl Project {
    /// Build a stored project from seed content.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::Project;
    /// use portfolio_content::ContentRegistry;
    ///
    /// let registry = ContentRegistry::bundled().expect("bundled registry");
    /// let seed = &registry.default_seed().projects()[0];
    /// let project = Project::from_seed(1, seed);
    /// assert_eq!(project.title, seed.title);
    /// ```
    pub fn from_seed(id: i32, seed: &ProjectSeed) -> Self {
        Self {
            id,
            title: seed.title.clone(),
            description: seed.description.clone(),
            image_url: seed.image_url.clone(),
            tech_stack: seed.tech_stack.clone(),
            github_url: seed.github_url.clone(),
            live_demo_url: seed.live_demo_url.clone(),
            featured: seed.featured,
        }
    }
}

/// A work experience entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    /// Store-assigned identifier.
    pub id: i32,
    /// Employer or organisation.
    pub company: String,
    /// Role held.
    pub role: String,
    /// Free-text period, e.g. `2022 - Present`.
    pub period: String,
    /// Summary of the work.
    pub description: String,
}

impl Experience {
    /// Build a stored experience from seed content.
    pub fn from_seed(id: i32, seed: &ExperienceSeed) -> Self {
        Self {
            id,
            company: seed.company.clone(),
            role: seed.role.clone(),
            period: seed.period.clone(),
            description: seed.description.clone(),
        }
    }
}

/// An achievement or certification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    /// Store-assigned identifier.
    pub id: i32,
    /// Display title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Free-text date, e.g. `October 2023`.
    pub year: String,
    /// External reference.
    pub link: Option<String>,
}

impl Achievement {
    /// Build a stored achievement from seed content.
    pub fn from_seed(id: i32, seed: &AchievementSeed) -> Self {
        Self {
            id,
            title: seed.title.clone(),
            description: seed.description.clone(),
            year: seed.year.clone(),
            link: seed.link.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn project_seed(live_demo_url: Option<&str>) -> ProjectSeed {
        ProjectSeed {
            title: "Neon Landing Page".to_owned(),
            description: "Landing page".to_owned(),
            image_url: "https://img".to_owned(),
            tech_stack: vec!["React".to_owned(), "Tailwind".to_owned()],
            github_url: Some("#".to_owned()),
            live_demo_url: live_demo_url.map(str::to_owned),
            featured: false,
        }
    }

    #[test]
    fn project_serialises_camel_case_with_null_links() {
        let project = Project::from_seed(3, &project_seed(None));
        let value = serde_json::to_value(&project).expect("serialise project");
        assert_eq!(
            value,
            json!({
                "id": 3,
                "title": "Neon Landing Page",
                "description": "Landing page",
                "imageUrl": "https://img",
                "techStack": ["React", "Tailwind"],
                "githubUrl": "#",
                "liveDemoUrl": null,
                "featured": false,
            })
        );
    }

    #[test]
    fn achievement_uses_year_field() {
        let achievement = Achievement::from_seed(
            1,
            &AchievementSeed {
                title: "AWS Certified Developer".to_owned(),
                description: "Associate level".to_owned(),
                year: "January 2024".to_owned(),
                link: None,
            },
        );
        let value = serde_json::to_value(&achievement).expect("serialise achievement");
        assert_eq!(value["year"], "January 2024");
        assert!(value.get("date").is_none());
        assert!(value["link"].is_null());
    }
}
