//! Reqwest-backed Resend notifier.
//!
//! This adapter owns transport details only: request serialisation, timeout
//! and HTTP error mapping. User-supplied values are HTML-escaped before they
//! are placed in the email body.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use url::Url;

use crate::domain::Message;
use crate::domain::ports::{ContactNotifier, NotificationError};

/// Production endpoint of the Resend email API.
pub const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Connection and addressing settings for [`ResendNotifier`].
#[derive(Debug, Clone)]
pub struct ResendConfig {
    /// API endpoint receiving the send request.
    pub endpoint: Url,
    /// Bearer token.
    pub api_key: String,
    /// Sender, e.g. `Portfolio Contact <onboarding@resend.dev>`.
    pub from: String,
    /// Recipient of every notification.
    pub to: String,
    /// Whole-request timeout.
    pub timeout: Duration,
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: String,
    html: String,
    reply_to: &'a str,
}

/// Notifier that emails the site owner through Resend.
pub struct ResendNotifier {
    client: Client,
    endpoint: Url,
    api_key: String,
    from: String,
    to: String,
}

impl ResendNotifier {
    /// Build a notifier using a reqwest client with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: ResendConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint,
            api_key: config.api_key,
            from: config.from,
            to: config.to,
        })
    }
}

#[async_trait]
impl ContactNotifier for ResendNotifier {
    async fn notify(&self, message: &Message) -> Result<(), NotificationError> {
        let request = build_request(&self.from, &self.to, message);
        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(self.api_key.as_str())
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.bytes().await.map_err(map_transport_error)?;
        Err(map_status_error(status, body.as_ref()))
    }
}

fn build_request<'a>(from: &'a str, to: &'a str, message: &'a Message) -> SendEmailRequest<'a> {
    SendEmailRequest {
        from,
        to: [to],
        subject: format!("New Message from {}", message.name),
        html: render_html(message),
        reply_to: message.email.as_str(),
    }
}

fn render_html(message: &Message) -> String {
    format!(
        concat!(
            "<div style=\"font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; border: 1px solid #eee; border-radius: 10px;\">",
            "<h2 style=\"color: #333; border-bottom: 2px solid #00E5FF; padding-bottom: 10px;\">New Portfolio Message</h2>",
            "<p><strong>Name:</strong> {name}</p>",
            "<p><strong>Email:</strong> {email}</p>",
            "<div style=\"background: #f9f9f9; padding: 15px; border-radius: 5px; margin-top: 20px;\">",
            "<p><strong>Message:</strong></p>",
            "<p style=\"white-space: pre-wrap;\">{body}</p>",
            "</div>",
            "<p style=\"font-size: 12px; color: #666; margin-top: 30px; border-top: 1px solid #eee; padding-top: 10px;\">",
            "Sent from your portfolio website contact form.",
            "</p>",
            "</div>",
        ),
        name = escape_html(&message.name),
        email = escape_html(&message.email),
        body = escape_html(&message.message),
    )
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn map_transport_error(error: reqwest::Error) -> NotificationError {
    NotificationError::transport(error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> NotificationError {
    NotificationError::rejected(status.as_u16(), body_preview(body))
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network request building and mapping.

    use super::*;
    use chrono::Utc;
    use rstest::rstest;
    use serde_json::json;

    fn message(name: &str, body: &str) -> Message {
        Message {
            id: 4,
            name: name.to_owned(),
            email: "al@x.com".to_owned(),
            message: body.to_owned(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn request_body_matches_provider_contract() {
        let message = message("Al", "Interested in working together");
        let request = build_request("Portfolio Contact <onboarding@resend.dev>", "owner@example.com", &message);
        let value = serde_json::to_value(&request).expect("serialise request");

        assert_eq!(value["from"], json!("Portfolio Contact <onboarding@resend.dev>"));
        assert_eq!(value["to"], json!(["owner@example.com"]));
        assert_eq!(value["subject"], json!("New Message from Al"));
        assert_eq!(value["reply_to"], json!("al@x.com"));
        assert!(
            value["html"]
                .as_str()
                .is_some_and(|html| html.contains("Interested in working together"))
        );
    }

    #[test]
    fn user_values_are_escaped_in_html() {
        let html = render_html(&message("<script>", "Tom & \"Jerry\" say 'hi'"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Tom &amp; &quot;Jerry&quot; say &#39;hi&#39;"));
    }

    #[rstest]
    #[case(StatusCode::UNPROCESSABLE_ENTITY, 422)]
    #[case(StatusCode::UNAUTHORIZED, 401)]
    #[case(StatusCode::INTERNAL_SERVER_ERROR, 500)]
    fn non_success_statuses_become_rejections(#[case] status: StatusCode, #[case] expected: u16) {
        let error = map_status_error(status, b"{\"message\":  \"invalid   `to` field\"}");
        assert_eq!(
            error,
            NotificationError::rejected(expected, "{\"message\": \"invalid `to` field\"}")
        );
    }

    #[test]
    fn long_bodies_are_truncated() {
        let body = "x".repeat(400);
        let preview = body_preview(body.as_bytes());
        assert_eq!(preview.chars().count(), 163);
        assert!(preview.ends_with("..."));
    }
}
