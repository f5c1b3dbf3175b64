//! Contact form endpoint.
//!
//! ```text
//! POST /api/messages {"name":"Al","email":"al@x.com","message":"Interested in working together"}
//! ```
//!
//! The body is accepted as untyped JSON so the domain validator can report
//! the first failing field itself.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, post, web};
use serde_json::Value;
use tracing::debug;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{
    ContactFormSchema, FieldErrorResponse, MessageAcceptedResponse, ServerErrorResponse,
};
use crate::inbound::http::state::HttpState;

/// Largest accepted request body, in bytes.
pub const JSON_BODY_LIMIT: usize = 64 * 1024;

/// Message reported when the body cannot be parsed as JSON.
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON body";

/// JSON extractor configuration for the contact endpoint.
///
/// Payload errors (malformed JSON, wrong content type, oversize body) become
/// validation errors against the document root.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejecting unreadable contact payload");
    let message = match &err {
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            format!("Request body exceeds {JSON_BODY_LIMIT} bytes")
        }
        JsonPayloadError::ContentType => "Expected application/json body".to_owned(),
        _ => INVALID_JSON_MESSAGE.to_owned(),
    };
    Error::invalid_field(message, "").into()
}

/// Submit the contact form.
#[utoipa::path(
    post,
    path = "/api/messages",
    request_body = ContactFormSchema,
    responses(
        (status = 201, description = "Message stored", body = MessageAcceptedResponse),
        (status = 400, description = "Validation failed", body = FieldErrorResponse),
        (status = 500, description = "Internal server error", body = ServerErrorResponse)
    ),
    tags = ["contact"],
    operation_id = "createMessage"
)]
#[post("/messages")]
pub async fn create_message(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let raw = payload.into_inner();
    state.contact.submit(&raw).await?;
    Ok(HttpResponse::Created().json(MessageAcceptedResponse { success: true }))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::{MockContactCommand, MockPortfolioQuery};
    use crate::domain::{ContactSubmission, Message};
    use crate::inbound::http::configure;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use chrono::Utc;
    use rstest::rstest;
    use serde_json::json;
    use std::sync::Arc;

    fn state_with(contact: MockContactCommand) -> web::Data<HttpState> {
        web::Data::new(HttpState::new(
            Arc::new(MockPortfolioQuery::new()),
            Arc::new(contact),
        ))
    }

    fn validating_contact() -> MockContactCommand {
        let mut contact = MockContactCommand::new();
        contact.expect_submit().returning(|raw| {
            let message = ContactSubmission::validate(raw)?;
            Ok::<Message, Error>(message.into_message(1, Utc::now()))
        });
        contact
    }

    #[actix_web::test]
    async fn valid_submission_returns_created() {
        let app = test::init_service(
            App::new()
                .app_data(state_with(validating_contact()))
                .configure(configure),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/messages")
            .set_json(json!({
                "name": "Al",
                "email": "al@x.com",
                "message": "Interested in working together",
            }))
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({"success": true}));
    }

    #[rstest]
    #[case(json!({"name": "A", "email": "a@x.com", "message": "short"}), "name", "Name must be at least 2 characters")]
    #[case(json!({"name": "Al", "email": "not-an-email", "message": "long enough text"}), "email", "Please enter a valid email address")]
    #[case(json!({"name": "Al", "email": "al@x.com", "message": "short"}), "message", "Message must be at least 10 characters")]
    #[actix_web::test]
    async fn invalid_submission_returns_field_error(
        #[case] payload: Value,
        #[case] field: &str,
        #[case] message: &str,
    ) {
        let app = test::init_service(
            App::new()
                .app_data(state_with(validating_contact()))
                .configure(configure),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/messages")
            .set_json(payload)
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({"message": message, "field": field}));
    }

    #[actix_web::test]
    async fn malformed_json_is_a_root_field_error() {
        let mut contact = MockContactCommand::new();
        contact.expect_submit().never();
        let app = test::init_service(App::new().app_data(state_with(contact)).configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/api/messages")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\": ")
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(res.headers().contains_key("cache-control"));
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({"message": "Invalid JSON body", "field": ""}));
    }

    #[actix_web::test]
    async fn oversize_body_is_rejected() {
        let mut contact = MockContactCommand::new();
        contact.expect_submit().never();
        let app = test::init_service(App::new().app_data(state_with(contact)).configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/api/messages")
            .set_json(json!({
                "name": "Al",
                "email": "al@x.com",
                "message": "x".repeat(JSON_BODY_LIMIT + 1),
            }))
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["field"], "");
    }

    #[actix_web::test]
    async fn unexpected_failure_is_a_generic_500() {
        let mut contact = MockContactCommand::new();
        contact
            .expect_submit()
            .return_once(|_| Err(Error::internal("insert failed: disk full")));
        let app = test::init_service(App::new().app_data(state_with(contact)).configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/api/messages")
            .set_json(json!({
                "name": "Al",
                "email": "al@x.com",
                "message": "Interested in working together",
            }))
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({"message": "Internal Server Error"}));
    }
}
