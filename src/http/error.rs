//! Endpoint errors and their fixed JSON rendering.

use crate::assistant::{domain::DenialReason, services::AccessDenied};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Failure returned to HTTP clients.
///
/// Each variant renders as `{"error": <fixed message>, "success": false}`;
/// underlying causes are logged where they occur and never sent to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No profile matches the requested assistant type.
    #[error("Invalid assistant type")]
    InvalidAssistant,
    /// The profile does not serve the request's domain.
    #[error("Access denied for this domain")]
    DomainForbidden,
    /// The profile needs an authorization header.
    #[error("Authentication required")]
    AuthRequired,
    /// The provider could not open a thread.
    #[error("Failed to create thread")]
    ThreadCreation,
    /// `threadId` or `message` was missing or blank.
    #[error("Missing threadId or message")]
    MissingFields,
    /// The message turn failed, timed out or hit a provider error.
    #[error("Failed to send message")]
    SendFailed,
    /// The request body was not valid JSON for the endpoint.
    #[error("Invalid request body")]
    InvalidBody,
}

impl ApiError {
    /// Returns the HTTP status for this error.
    #[must_use]
    pub const fn status(self) -> StatusCode {
        match self {
            Self::InvalidAssistant | Self::MissingFields | Self::InvalidBody => {
                StatusCode::BAD_REQUEST
            }
            Self::DomainForbidden => StatusCode::FORBIDDEN,
            Self::AuthRequired => StatusCode::UNAUTHORIZED,
            Self::ThreadCreation | Self::SendFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<&AccessDenied> for ApiError {
    fn from(denied: &AccessDenied) -> Self {
        match denied.reason() {
            DenialReason::UnknownAssistant => Self::InvalidAssistant,
            DenialReason::DomainForbidden => Self::DomainForbidden,
            DenialReason::AuthRequired => Self::AuthRequired,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    success: bool,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
            success: false,
        };
        (self.status(), Json(body)).into_response()
    }
}
