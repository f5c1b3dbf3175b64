//! PostgreSQL-backed portfolio repository.
//!
//! Implements the read port for the three portfolio collections and the
//! first-run seeding port. Reads are ordered by `id`, which follows insertion
//! order because ids come from a `SERIAL` sequence.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use portfolio_content::SeedDataset;

use crate::domain::ports::{
    PortfolioRepository, PortfolioRepositoryError, PortfolioSeedRepository,
    PortfolioSeedRepositoryError, SeedingResult,
};
use crate::domain::{Achievement, Experience, Project};

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{
    AchievementRow, ExperienceRow, NewAchievementRow, NewExperienceRow, NewProjectRow, ProjectRow,
};
use super::pool::{DbPool, PoolError};
use super::schema::{achievements, experiences, projects};

/// Diesel-backed implementation of the portfolio ports.
#[derive(Clone)]
pub struct DieselPortfolioRepository {
    pool: DbPool,
}

impl DieselPortfolioRepository {
    /// Create a new repository with the given connection pool.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use backend::outbound::persistence::{DbPool, DieselPortfolioRepository, PoolConfig};
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/portfolio")).await?;
    /// let repository = DieselPortfolioRepository::new(pool);
    /// # let _ = repository;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn read_pool_error(error: PoolError) -> PortfolioRepositoryError {
    map_pool_error(error, PortfolioRepositoryError::connection)
}

fn read_diesel_error(error: diesel::result::Error) -> PortfolioRepositoryError {
    map_diesel_error(
        error,
        PortfolioRepositoryError::query,
        PortfolioRepositoryError::connection,
    )
}

fn seed_pool_error(error: PoolError) -> PortfolioSeedRepositoryError {
    map_pool_error(error, PortfolioSeedRepositoryError::connection)
}

fn seed_diesel_error(error: diesel::result::Error) -> PortfolioSeedRepositoryError {
    map_diesel_error(
        error,
        PortfolioSeedRepositoryError::query,
        PortfolioSeedRepositoryError::connection,
    )
}

#[async_trait]
impl PortfolioRepository for DieselPortfolioRepository {
    async fn list_projects(&self) -> Result<Vec<Project>, PortfolioRepositoryError> {
        let mut conn = self.pool.get().await.map_err(read_pool_error)?;
        let rows: Vec<ProjectRow> = projects::table
            .select(ProjectRow::as_select())
            .order(projects::id.asc())
            .load(&mut conn)
            .await
            .map_err(read_diesel_error)?;
        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn list_experiences(&self) -> Result<Vec<Experience>, PortfolioRepositoryError> {
        let mut conn = self.pool.get().await.map_err(read_pool_error)?;
        let rows: Vec<ExperienceRow> = experiences::table
            .select(ExperienceRow::as_select())
            .order(experiences::id.asc())
            .load(&mut conn)
            .await
            .map_err(read_diesel_error)?;
        Ok(rows.into_iter().map(Experience::from).collect())
    }

    async fn list_achievements(&self) -> Result<Vec<Achievement>, PortfolioRepositoryError> {
        let mut conn = self.pool.get().await.map_err(read_pool_error)?;
        let rows: Vec<AchievementRow> = achievements::table
            .select(AchievementRow::as_select())
            .order(achievements::id.asc())
            .load(&mut conn)
            .await
            .map_err(read_diesel_error)?;
        Ok(rows.into_iter().map(Achievement::from).collect())
    }
}

#[async_trait]
impl PortfolioSeedRepository for DieselPortfolioRepository {
    async fn seed_if_empty(
        &self,
        dataset: &SeedDataset,
    ) -> Result<SeedingResult, PortfolioSeedRepositoryError> {
        let project_rows: Vec<NewProjectRow<'_>> = dataset
            .projects()
            .iter()
            .map(|seed| NewProjectRow {
                title: &seed.title,
                description: &seed.description,
                image_url: &seed.image_url,
                tech_stack: &seed.tech_stack,
                github_url: seed.github_url.as_deref(),
                live_demo_url: seed.live_demo_url.as_deref(),
                featured: seed.featured,
            })
            .collect();
        let experience_rows: Vec<NewExperienceRow<'_>> = dataset
            .experiences()
            .iter()
            .map(|seed| NewExperienceRow {
                company: &seed.company,
                role: &seed.role,
                period: &seed.period,
                description: &seed.description,
            })
            .collect();
        let achievement_rows: Vec<NewAchievementRow<'_>> = dataset
            .achievements()
            .iter()
            .map(|seed| NewAchievementRow {
                title: &seed.title,
                description: &seed.description,
                year: &seed.year,
                link: seed.link.as_deref(),
            })
            .collect();

        let mut conn = self.pool.get().await.map_err(seed_pool_error)?;
        conn.transaction(|conn| {
            async move {
                let existing: i64 = projects::table.count().get_result(conn).await?;
                if existing > 0 {
                    return Ok(SeedingResult::AlreadySeeded);
                }

                if !project_rows.is_empty() {
                    diesel::insert_into(projects::table)
                        .values(&project_rows)
                        .execute(conn)
                        .await?;
                }
                if !experience_rows.is_empty() {
                    diesel::insert_into(experiences::table)
                        .values(&experience_rows)
                        .execute(conn)
                        .await?;
                }
                if !achievement_rows.is_empty() {
                    diesel::insert_into(achievements::table)
                        .values(&achievement_rows)
                        .execute(conn)
                        .await?;
                }
                Ok(SeedingResult::Applied)
            }
            .scope_boxed()
        })
        .await
        .map_err(seed_diesel_error)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for repository error mapping.
    use super::*;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    #[test]
    fn checkout_failures_are_connection_errors() {
        let error = read_pool_error(PoolError::checkout("timed out"));
        assert_eq!(error, PortfolioRepositoryError::connection("timed out"));
    }

    #[test]
    fn closed_connections_during_seeding_are_connection_errors() {
        let error = seed_diesel_error(DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new(String::from("server closed the connection")),
        ));
        assert!(matches!(
            error,
            PortfolioSeedRepositoryError::Connection { .. }
        ));
    }

    #[test]
    fn query_failures_hide_driver_details() {
        let error = read_diesel_error(DieselError::DatabaseError(
            DatabaseErrorKind::Unknown,
            Box::new(String::from("relation \"projects\" does not exist")),
        ));
        assert_eq!(error, PortfolioRepositoryError::query("database error"));
    }
}
