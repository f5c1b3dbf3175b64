//! Validation of raw contact form submissions.
//!
//! Fields are checked in declared order (`name`, `email`, `message`) and only
//! the first failure is reported. Unknown keys are ignored and accepted
//! values are kept exactly as submitted.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};

use super::NewMessage;

/// Minimum number of characters in a sender name.
pub const NAME_MIN_CHARS: usize = 2;
/// Minimum number of characters in a message body.
pub const MESSAGE_MIN_CHARS: usize = 10;

/// A single validation failure: a human-readable message plus the dotted
/// path of the offending field (empty for the document root).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{path}: {message}")]
pub struct FieldError {
    /// Human-readable description of the failure.
    pub message: String,
    /// Dotted path of the offending field.
    pub path: String,
}

impl FieldError {
    /// Build a field error.
    pub fn new(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: path.into(),
        }
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        let pattern = concat!(
            r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
            r"@(?:[A-Za-z0-9][A-Za-z0-9-]*\.)+[A-Za-z]{2,}$",
        );
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Schema for the public contact form.
///
/// # Examples
/// ```
/// use backend::domain::ContactSubmission;
/// use serde_json::json;
///
/// let err = ContactSubmission::validate(&json!({
///     "name": "A",
///     "email": "a@x.com",
///     "message": "short",
/// }))
/// .unwrap_err();
/// assert_eq!(err.path, "name");
/// assert_eq!(err.message, "Name must be at least 2 characters");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactSubmission;

impl ContactSubmission {
    /// Validate an untyped request body into a [`NewMessage`].
    pub fn validate(raw: &Value) -> Result<NewMessage, FieldError> {
        let Some(object) = raw.as_object() else {
            return Err(FieldError::new("Expected object", ""));
        };

        let name = string_field(object, "name")?;
        if name.chars().count() < NAME_MIN_CHARS {
            return Err(FieldError::new("Name must be at least 2 characters", "name"));
        }

        let email = string_field(object, "email")?;
        if !is_valid_email(email) {
            return Err(FieldError::new("Please enter a valid email address", "email"));
        }

        let message = string_field(object, "message")?;
        if message.chars().count() < MESSAGE_MIN_CHARS {
            return Err(FieldError::new(
                "Message must be at least 10 characters",
                "message",
            ));
        }

        Ok(NewMessage::new(
            name.to_owned(),
            email.to_owned(),
            message.to_owned(),
        ))
    }
}

fn string_field<'a>(object: &'a Map<String, Value>, key: &'static str) -> Result<&'a str, FieldError> {
    match object.get(key) {
        None => Err(FieldError::new("Required", key)),
        Some(Value::String(value)) => Ok(value.as_str()),
        Some(_) => Err(FieldError::new("Expected string", key)),
    }
}

/// Returns `true` when `candidate` is a syntactically valid email address.
pub fn is_valid_email(candidate: &str) -> bool {
    email_regex().is_match(candidate)
}
