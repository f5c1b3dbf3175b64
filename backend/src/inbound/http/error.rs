//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON responses and status
//! codes. Validation failures surface their message and field; every other
//! failure is logged and reported with a generic message.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};
use crate::inbound::http::schemas::{FieldErrorResponse, ServerErrorResponse};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message returned for every non-validation failure.
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal Server Error";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::ServiceUnavailable | ErrorCode::InternalError => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        match self.code() {
            ErrorCode::InvalidRequest => builder.json(FieldErrorResponse {
                message: self.message().to_owned(),
                field: self.field().unwrap_or_default().to_owned(),
            }),
            _ => {
                error!(
                    code = ?self.code(),
                    trace_id = self.trace_id().unwrap_or_default(),
                    error = %self,
                    "request failed"
                );
                builder.json(ServerErrorResponse {
                    message: INTERNAL_SERVER_ERROR_MESSAGE.to_owned(),
                })
            }
        }
    }
}
