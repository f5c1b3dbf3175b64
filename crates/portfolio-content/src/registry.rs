//! Content registry types and JSON parsing.
//!
//! The registry holds named seed datasets plus the fallback collections. It
//! is loaded from JSON and validated eagerly so that a registry value is
//! always usable: the default seed exists, names are unique, and required
//! text fields are filled in.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::RegistryError;
use crate::records::{AchievementSeed, ExperienceSeed, ProjectSeed};
use crate::validation::{validate_achievements, validate_experiences, validate_projects};

/// Current supported registry version.
const SUPPORTED_VERSION: u32 = 1;

/// Registry shipped with the crate.
pub const BUNDLED_REGISTRY_JSON: &str = include_str!("../registry/content.json");

/// A validated content registry.
///
/// # Example
///
/// ```
/// use portfolio_content::ContentRegistry;
///
/// let json = r#"{
///     "version": 1,
///     "defaultSeed": "minimal",
///     "seeds": [{"name": "minimal", "projects": [], "experiences": [], "achievements": []}],
///     "fallback": {
///         "projects": [{
///             "title": "Placeholder",
///             "description": "Shown while loading",
///             "imageUrl": "https://example.com/p.png",
///             "techStack": ["Rust"]
///         }],
///         "experiences": [{
///             "company": "Acme",
///             "role": "Engineer",
///             "period": "2020 - 2022",
///             "description": "Built things"
///         }]
///     }
/// }"#;
///
/// let registry = ContentRegistry::from_json(json).expect("valid registry");
/// assert_eq!(registry.default_seed().name(), "minimal");
/// assert_eq!(registry.fallback().projects().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRegistry {
    version: u32,
    default_seed: SeedDataset,
    seeds: Vec<SeedDataset>,
    fallback: FallbackContent,
}

impl ContentRegistry {
    /// Parse the registry bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the bundled JSON fails validation, which
    /// the crate's own tests guard against.
    pub fn bundled() -> Result<Self, RegistryError> {
        Self::from_json(BUNDLED_REGISTRY_JSON)
    }

    /// Parse and validate a registry from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if:
    /// - The JSON is malformed or missing required fields
    /// - The version is unsupported
    /// - No seeds are defined, a seed name is blank, or a name repeats
    /// - `defaultSeed` names no dataset
    /// - A required record field is blank
    /// - A fallback collection is empty
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: RawContentRegistry =
            serde_json::from_str(json).map_err(|e| RegistryError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    fn from_raw(raw: RawContentRegistry) -> Result<Self, RegistryError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(RegistryError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        if raw.seeds.is_empty() {
            return Err(RegistryError::EmptySeeds);
        }

        let mut names = HashSet::with_capacity(raw.seeds.len());
        for (index, seed) in raw.seeds.iter().enumerate() {
            if seed.name.trim().is_empty() {
                return Err(RegistryError::BlankSeedName { index });
            }
            if !names.insert(seed.name.as_str()) {
                return Err(RegistryError::DuplicateSeedName {
                    name: seed.name.clone(),
                });
            }
            let scope = format!("seed '{}'", seed.name);
            validate_projects(&scope, &seed.projects)?;
            validate_experiences(&scope, &seed.experiences)?;
            validate_achievements(&scope, &seed.achievements)?;
            if seed.projects.is_empty() {
                return Err(RegistryError::EmptySeedProjects {
                    name: seed.name.clone(),
                });
            }
        }

        let fallback = FallbackContent::from_raw(raw.fallback)?;
        let seeds: Vec<SeedDataset> = raw.seeds.into_iter().map(SeedDataset::from).collect();
        let Some(default_seed) = seeds
            .iter()
            .find(|seed| seed.name == raw.default_seed)
            .cloned()
        else {
            return Err(RegistryError::UnknownDefaultSeed {
                name: raw.default_seed,
            });
        };

        Ok(Self {
            version: raw.version,
            default_seed,
            seeds,
            fallback,
        })
    }

    /// Returns the registry version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns all seed datasets in registry order.
    #[must_use]
    pub fn seeds(&self) -> &[SeedDataset] {
        &self.seeds
    }

    /// Returns the dataset named by `defaultSeed`.
    #[must_use]
    pub const fn default_seed(&self) -> &SeedDataset {
        &self.default_seed
    }

    /// Finds a seed dataset by name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SeedNotFound`] if no dataset with the given
    /// name exists.
    pub fn find_seed(&self, name: &str) -> Result<&SeedDataset, RegistryError> {
        self.seeds
            .iter()
            .find(|seed| seed.name == name)
            .ok_or_else(|| RegistryError::SeedNotFound {
                name: name.to_owned(),
            })
    }

    /// Returns the fallback collections.
    #[must_use]
    pub const fn fallback(&self) -> &FallbackContent {
        &self.fallback
    }
}

/// A named set of records a fresh store is populated with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedDataset {
    name: String,
    projects: Vec<ProjectSeed>,
    experiences: Vec<ExperienceSeed>,
    achievements: Vec<AchievementSeed>,
}

impl SeedDataset {
    /// Returns the dataset name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the project records in insertion order.
    #[must_use]
    pub fn projects(&self) -> &[ProjectSeed] {
        &self.projects
    }

    /// Returns the experience records in insertion order.
    #[must_use]
    pub fn experiences(&self) -> &[ExperienceSeed] {
        &self.experiences
    }

    /// Returns the achievement records in insertion order.
    #[must_use]
    pub fn achievements(&self) -> &[AchievementSeed] {
        &self.achievements
    }
}

impl From<RawSeedDataset> for SeedDataset {
    fn from(raw: RawSeedDataset) -> Self {
        Self {
            name: raw.name,
            projects: raw.projects,
            experiences: raw.experiences,
            achievements: raw.achievements,
        }
    }
}

/// Bundled substitute collections for the presentation layer.
///
/// Only projects and experiences have a fallback. Achievements render an
/// explicit empty state instead, so there is no achievements collection here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackContent {
    projects: Vec<ProjectSeed>,
    experiences: Vec<ExperienceSeed>,
}

impl FallbackContent {
    fn from_raw(raw: RawFallbackContent) -> Result<Self, RegistryError> {
        if raw.projects.is_empty() {
            return Err(RegistryError::EmptyFallback {
                collection: "projects",
            });
        }
        if raw.experiences.is_empty() {
            return Err(RegistryError::EmptyFallback {
                collection: "experiences",
            });
        }
        validate_projects("fallback", &raw.projects)?;
        validate_experiences("fallback", &raw.experiences)?;
        Ok(Self {
            projects: raw.projects,
            experiences: raw.experiences,
        })
    }

    /// Returns the fallback projects.
    #[must_use]
    pub fn projects(&self) -> &[ProjectSeed] {
        &self.projects
    }

    /// Returns the fallback experiences.
    #[must_use]
    pub fn experiences(&self) -> &[ExperienceSeed] {
        &self.experiences
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawContentRegistry {
    version: u32,
    default_seed: String,
    seeds: Vec<RawSeedDataset>,
    fallback: RawFallbackContent,
}

/// Raw JSON representation of a seed dataset.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawSeedDataset {
    name: String,
    #[serde(default)]
    projects: Vec<ProjectSeed>,
    #[serde(default)]
    experiences: Vec<ExperienceSeed>,
    #[serde(default)]
    achievements: Vec<AchievementSeed>,
}

/// Raw JSON representation of the fallback collections.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawFallbackContent {
    projects: Vec<ProjectSeed>,
    experiences: Vec<ExperienceSeed>,
}
