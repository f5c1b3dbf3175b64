//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: the three portfolio reads, the contact form and the health
//!   probes
//! - **Schemas**: wrappers from [`crate::inbound::http::schemas`] that document
//!   domain records without coupling them to utoipa
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::schemas::{
    AchievementSchema, ContactFormSchema, ExperienceSchema, FieldErrorResponse,
    MessageAcceptedResponse, ProjectSchema, ServerErrorResponse,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio backend API",
        description = "Read-only portfolio content and the public contact form."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::content::list_projects,
        crate::inbound::http::content::list_experiences,
        crate::inbound::http::content::list_achievements,
        crate::inbound::http::messages::create_message,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ProjectSchema,
        ExperienceSchema,
        AchievementSchema,
        ContactFormSchema,
        MessageAcceptedResponse,
        FieldErrorResponse,
        ServerErrorResponse,
    )),
    tags(
        (name = "portfolio", description = "Seeded portfolio content"),
        (name = "contact", description = "Contact form submissions"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI document structure.

    use super::*;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const PROJECT_SCHEMA_NAME: &str = "crate.domain.Project";
    const ACHIEVEMENT_SCHEMA_NAME: &str = "crate.domain.Achievement";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn documents_every_api_path() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/projects",
            "/api/experiences",
            "/api/achievements",
            "/api/messages",
            "/health/ready",
            "/health/live",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing path {path}");
        }
    }

    #[test]
    fn project_schema_is_camel_case() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let project = schemas.get(PROJECT_SCHEMA_NAME).expect("Project schema");

        assert_object_schema_has_field(project, "techStack");
        assert_object_schema_has_field(project, "liveDemoUrl");
    }

    #[test]
    fn achievement_schema_has_year() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let achievement = schemas
            .get(ACHIEVEMENT_SCHEMA_NAME)
            .expect("Achievement schema");

        assert_object_schema_has_field(achievement, "year");
    }
}
