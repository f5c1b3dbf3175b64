//! Internal Diesel row types.
//!
//! Rows never leave the persistence module; repositories convert them into
//! domain records.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{achievements, experiences, messages, projects};
use crate::domain::{Achievement, Experience, Message, Project};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProjectRow {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub tech_stack: Vec<String>,
    pub github_url: Option<String>,
    pub live_demo_url: Option<String>,
    pub featured: bool,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            image_url: row.image_url,
            tech_stack: row.tech_stack,
            github_url: row.github_url,
            live_demo_url: row.live_demo_url,
            featured: row.featured,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = projects)]
pub(crate) struct NewProjectRow<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub image_url: &'a str,
    pub tech_stack: &'a [String],
    pub github_url: Option<&'a str>,
    pub live_demo_url: Option<&'a str>,
    pub featured: bool,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = experiences)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ExperienceRow {
    pub id: i32,
    pub company: String,
    pub role: String,
    pub period: String,
    pub description: String,
}

impl From<ExperienceRow> for Experience {
    fn from(row: ExperienceRow) -> Self {
        Self {
            id: row.id,
            company: row.company,
            role: row.role,
            period: row.period,
            description: row.description,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = experiences)]
pub(crate) struct NewExperienceRow<'a> {
    pub company: &'a str,
    pub role: &'a str,
    pub period: &'a str,
    pub description: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = achievements)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AchievementRow {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub year: String,
    pub link: Option<String>,
}

impl From<AchievementRow> for Achievement {
    fn from(row: AchievementRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            year: row.year,
            link: row.link,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = achievements)]
pub(crate) struct NewAchievementRow<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub year: &'a str,
    pub link: Option<&'a str>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MessageRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            message: row.message,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = messages)]
pub(crate) struct NewMessageRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_row_keeps_nullable_links() {
        let project = Project::from(ProjectRow {
            id: 2,
            title: "E-Commerce Dashboard".to_owned(),
            description: "Analytics".to_owned(),
            image_url: "https://img".to_owned(),
            tech_stack: vec!["Next.js".to_owned(), "PostgreSQL".to_owned()],
            github_url: None,
            live_demo_url: Some("#".to_owned()),
            featured: true,
        });
        assert_eq!(project.github_url, None);
        assert_eq!(project.live_demo_url.as_deref(), Some("#"));
        assert_eq!(project.tech_stack, ["Next.js", "PostgreSQL"]);
    }
}
