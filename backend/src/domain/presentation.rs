//! Data contract of the portfolio page sections.
//!
//! Projects and experiences substitute the bundled fallback collection when
//! the live collection is empty or still loading. Achievements never fall
//! back: they render an explicit empty-state message instead. The two
//! behaviours are intentionally different and must stay that way.

use portfolio_content::FallbackContent;

use super::{Achievement, Experience, Project};

/// Message rendered when there are no achievements to show.
pub const ACHIEVEMENTS_EMPTY_MESSAGE: &str = "No achievements found in storage.";

/// State of a collection fetched by the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionLoad<T> {
    /// The request has not completed yet.
    Loading,
    /// The request returned these records.
    Loaded(Vec<T>),
}

impl<T> CollectionLoad<T> {
    fn into_non_empty(self) -> Option<Vec<T>> {
        match self {
            Self::Loaded(items) if !items.is_empty() => Some(items),
            _ => None,
        }
    }
}

/// What the achievements section renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AchievementsSection {
    /// Placeholder while the collection loads.
    Loading,
    /// Records to render.
    Items(Vec<Achievement>),
    /// Empty-state message.
    Empty(&'static str),
}

/// Resolves the records each page section renders.
#[derive(Debug, Clone)]
pub struct PortfolioPresenter {
    fallback_projects: Vec<Project>,
    fallback_experiences: Vec<Experience>,
}

impl PortfolioPresenter {
    /// Build a presenter over the bundled fallback content.
    ///
    /// Fallback records are numbered from 1 in declaration order.
    pub fn new(fallback: &FallbackContent) -> Self {
        Self {
            fallback_projects: number(fallback.projects(), Project::from_seed),
            fallback_experiences: number(fallback.experiences(), Experience::from_seed),
        }
    }

    /// Projects to render, falling back when empty or loading.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{CollectionLoad, PortfolioPresenter};
    /// use portfolio_content::ContentRegistry;
    ///
    /// let registry = ContentRegistry::bundled().expect("bundled registry");
    /// let presenter = PortfolioPresenter::new(registry.fallback());
    /// let shown = presenter.projects(CollectionLoad::Loaded(Vec::new()));
    /// assert_eq!(shown.len(), registry.fallback().projects().len());
    /// ```
    pub fn projects(&self, load: CollectionLoad<Project>) -> Vec<Project> {
        load.into_non_empty()
            .unwrap_or_else(|| self.fallback_projects.clone())
    }

    /// Experiences to render, falling back when empty or loading.
    pub fn experiences(&self, load: CollectionLoad<Experience>) -> Vec<Experience> {
        load.into_non_empty()
            .unwrap_or_else(|| self.fallback_experiences.clone())
    }

    /// Achievements section state. There is no fallback collection.
    pub fn achievements(&self, load: CollectionLoad<Achievement>) -> AchievementsSection {
        match load {
            CollectionLoad::Loading => AchievementsSection::Loading,
            CollectionLoad::Loaded(items) if items.is_empty() => {
                AchievementsSection::Empty(ACHIEVEMENTS_EMPTY_MESSAGE)
            }
            CollectionLoad::Loaded(items) => AchievementsSection::Items(items),
        }
    }
}

fn number<S, T>(seeds: &[S], build: impl Fn(i32, &S) -> T) -> Vec<T> {
    (1..).zip(seeds).map(|(id, seed)| build(id, seed)).collect()
}
