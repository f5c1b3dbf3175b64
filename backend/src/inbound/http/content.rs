//! Portfolio read endpoints.
//!
//! ```text
//! GET /api/projects
//! GET /api/experiences
//! GET /api/achievements
//! ```

use actix_web::{HttpResponse, get, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{
    AchievementSchema, ExperienceSchema, ProjectSchema, ServerErrorResponse,
};
use crate::inbound::http::state::HttpState;

/// List all projects.
#[utoipa::path(
    get,
    path = "/api/projects",
    responses(
        (
            status = 200,
            description = "All projects in insertion order",
            headers(("Cache-Control" = String, description = "Always no-store")),
            body = [ProjectSchema]
        ),
        (status = 500, description = "Internal server error", body = ServerErrorResponse)
    ),
    tags = ["portfolio"],
    operation_id = "listProjects"
)]
#[get("/projects")]
pub async fn list_projects(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let projects = state.portfolio.projects().await?;
    Ok(HttpResponse::Ok().json(projects))
}

/// List all experiences.
#[utoipa::path(
    get,
    path = "/api/experiences",
    responses(
        (
            status = 200,
            description = "All experiences in insertion order",
            headers(("Cache-Control" = String, description = "Always no-store")),
            body = [ExperienceSchema]
        ),
        (status = 500, description = "Internal server error", body = ServerErrorResponse)
    ),
    tags = ["portfolio"],
    operation_id = "listExperiences"
)]
#[get("/experiences")]
pub async fn list_experiences(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let experiences = state.portfolio.experiences().await?;
    Ok(HttpResponse::Ok().json(experiences))
}

/// List all achievements.
#[utoipa::path(
    get,
    path = "/api/achievements",
    responses(
        (
            status = 200,
            description = "All achievements in insertion order",
            headers(("Cache-Control" = String, description = "Always no-store")),
            body = [AchievementSchema]
        ),
        (status = 500, description = "Internal server error", body = ServerErrorResponse)
    ),
    tags = ["portfolio"],
    operation_id = "listAchievements"
)]
#[get("/achievements")]
pub async fn list_achievements(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let achievements = state.portfolio.achievements().await?;
    Ok(HttpResponse::Ok().json(achievements))
}
