//! Record-level validation for registry content.
//!
//! Only required text fields are checked: they must contain something other
//! than whitespace. Optional links and tag lists are accepted as written.

use crate::error::RegistryError;
use crate::records::{AchievementSeed, ExperienceSeed, ProjectSeed};

fn require_text(
    value: &str,
    field: &'static str,
    location: impl FnOnce() -> String,
) -> Result<(), RegistryError> {
    if value.trim().is_empty() {
        return Err(RegistryError::BlankField {
            location: location(),
            field,
        });
    }
    Ok(())
}

pub(crate) fn validate_projects(scope: &str, projects: &[ProjectSeed]) -> Result<(), RegistryError> {
    for (index, project) in projects.iter().enumerate() {
        let location = || format!("{scope} projects[{index}]");
        require_text(&project.title, "title", location)?;
        require_text(&project.description, "description", location)?;
        require_text(&project.image_url, "imageUrl", location)?;
    }
    Ok(())
}

pub(crate) fn validate_experiences(
    scope: &str,
    experiences: &[ExperienceSeed],
) -> Result<(), RegistryError> {
    for (index, experience) in experiences.iter().enumerate() {
        let location = || format!("{scope} experiences[{index}]");
        require_text(&experience.company, "company", location)?;
        require_text(&experience.role, "role", location)?;
        require_text(&experience.period, "period", location)?;
        require_text(&experience.description, "description", location)?;
    }
    Ok(())
}

pub(crate) fn validate_achievements(
    scope: &str,
    achievements: &[AchievementSeed],
) -> Result<(), RegistryError> {
    for (index, achievement) in achievements.iter().enumerate() {
        let location = || format!("{scope} achievements[{index}]");
        require_text(&achievement.title, "title", location)?;
        require_text(&achievement.description, "description", location)?;
        require_text(&achievement.year, "year", location)?;
    }
    Ok(())
}
