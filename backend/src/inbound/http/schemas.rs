//! Response bodies and OpenAPI schema definitions.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration, plus the adapter-owned
//! response envelopes.

use serde::Serialize;
use utoipa::ToSchema;

/// Body returned when a request fails validation.
#[derive(Debug, Serialize, ToSchema)]
pub struct FieldErrorResponse {
    /// Human-readable description of the first failure.
    #[schema(example = "Name must be at least 2 characters")]
    pub message: String,
    /// Dotted path of the offending field; empty for the whole body.
    #[schema(example = "name")]
    pub field: String,
}

/// Body returned for unexpected server failures.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServerErrorResponse {
    /// Generic message; details are only logged.
    #[schema(example = "Internal Server Error")]
    pub message: String,
}

/// Body returned when a contact message was stored.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageAcceptedResponse {
    /// Always `true`.
    pub success: bool,
}

/// Request body of the contact form.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ContactFormSchema {
    /// Sender name, at least 2 characters.
    #[schema(example = "Al", min_length = 2)]
    name: String,
    /// Sender email address.
    #[schema(example = "al@x.com")]
    email: String,
    /// Message body, at least 10 characters.
    #[schema(example = "Interested in working together", min_length = 10)]
    message: String,
}

/// OpenAPI schema for [`crate::domain::Project`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Project, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ProjectSchema {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    id: i32,
    /// Display title.
    #[schema(example = "AI Chat Assistant")]
    title: String,
    /// Short description.
    description: String,
    /// Cover image reference.
    image_url: String,
    /// Ordered technology tags.
    #[schema(example = json!(["React", "TypeScript"]))]
    tech_stack: Vec<String>,
    /// Source repository link.
    github_url: Option<String>,
    /// Live demo link.
    live_demo_url: Option<String>,
    /// Whether the project is highlighted.
    featured: bool,
}

/// OpenAPI schema for [`crate::domain::Experience`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Experience)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ExperienceSchema {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    id: i32,
    /// Employer or organisation.
    #[schema(example = "Tech Innovations Inc.")]
    company: String,
    /// Role held.
    role: String,
    /// Free-text period.
    #[schema(example = "2022 - Present")]
    period: String,
    /// Summary of the work.
    description: String,
}

/// OpenAPI schema for [`crate::domain::Achievement`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Achievement)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AchievementSchema {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    id: i32,
    /// Display title.
    title: String,
    /// Short description.
    description: String,
    /// Free-text date.
    #[schema(example = "October 2023")]
    year: String,
    /// External reference.
    link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_json<T: PartialSchema>() -> serde_json::Value {
        serde_json::to_value(T::schema()).expect("schema serialises")
    }

    #[test]
    fn project_schema_uses_camel_case() {
        let schema = schema_json::<ProjectSchema>();
        let properties = schema["properties"]
            .as_object()
            .expect("object properties");
        for key in ["imageUrl", "techStack", "githubUrl", "liveDemoUrl", "featured"] {
            assert!(properties.contains_key(key), "missing {key}");
        }
    }

    #[test]
    fn achievement_schema_exposes_year() {
        let schema = schema_json::<AchievementSchema>();
        assert!(schema["properties"].get("year").is_some());
        assert!(schema["properties"].get("date").is_none());
    }

    #[test]
    fn field_error_schema_requires_both_fields() {
        let schema = schema_json::<FieldErrorResponse>();
        let required = schema["required"].as_array().expect("required list");
        assert!(required.iter().any(|v| v == "message"));
        assert!(required.iter().any(|v| v == "field"));
    }
}
