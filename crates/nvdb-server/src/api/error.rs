//! Error envelope and status mapping

use nvdb_domain::error::{Error, ErrorKind};
use rocket::http::Status;
use rocket::serde::json::{self, Json};
use rocket::{Request, catch};
use serde::Serialize;
use tracing::error;

use crate::constants::STATUS_ERROR;

/// Failure envelope
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Always `error`
    pub status: &'static str,
    /// Human-readable detail
    pub message: String,
    /// HTTP status code
    pub code: u16,
}

/// Rejected request: status plus envelope
pub type ApiError = (Status, Json<ErrorResponse>);

/// Build a rejection
pub fn reject(status: Status, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            status: STATUS_ERROR,
            message: message.into(),
            code: status.code,
        }),
    )
}

/// HTTP status for a domain error
pub fn status_for(err: &Error) -> Status {
    match err.kind() {
        ErrorKind::InvalidInput => Status::BadRequest,
        ErrorKind::NotFound => Status::NotFound,
        ErrorKind::Upstream | ErrorKind::Storage | ErrorKind::Internal => {
            Status::InternalServerError
        }
    }
}

/// Map a domain error onto the failure envelope
///
/// Client errors carry their own message; server errors are prefixed with
/// `context`.
pub fn api_error(err: &Error, context: &str) -> ApiError {
    let status = status_for(err);
    let message = match err {
        Error::InvalidArgument { message } => message.clone(),
        Error::NotFound { resource } => format!("{resource} not found"),
        other => {
            error!(error = %other, "{context}");
            format!("{context}: {other}")
        }
    };
    reject(status, message)
}

/// Map an unreadable or malformed JSON body onto a 400 envelope
pub fn body_error(err: &json::Error<'_>) -> ApiError {
    let message = match err {
        json::Error::Io(e) => format!("Failed to read request body: {e}"),
        json::Error::Parse(_, e) => format!("Invalid request body: {e}"),
    };
    reject(Status::BadRequest, message)
}

// ============================================================================
// Catchers
// ============================================================================

#[catch(400)]
pub fn bad_request(_req: &Request<'_>) -> Json<ErrorResponse> {
    reject(Status::BadRequest, "Bad request").1
}

#[catch(404)]
pub fn not_found(req: &Request<'_>) -> Json<ErrorResponse> {
    reject(Status::NotFound, format!("No route for {} {}", req.method(), req.uri())).1
}

#[catch(422)]
pub fn unprocessable(_req: &Request<'_>) -> Json<ErrorResponse> {
    reject(Status::UnprocessableEntity, "Unprocessable request body").1
}

#[catch(500)]
pub fn internal_error(_req: &Request<'_>) -> Json<ErrorResponse> {
    reject(Status::InternalServerError, "Internal server error").1
}
