use application_ports::invitation::InvitationError;
use application_ports::rsvp::RsvpError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Invitation(#[from] InvitationError),
    #[error(transparent)]
    Rsvp(#[from] RsvpError),
    #[error("{0}")]
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorBody {
    ok: bool,
    error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Invitation(InvitationError::TitleTooShort) => StatusCode::BAD_REQUEST,
            ApiError::Invitation(InvitationError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Invitation(InvitationError::AccessDenied) => StatusCode::FORBIDDEN,
            ApiError::Invitation(InvitationError::SlugUnavailable) => StatusCode::CONFLICT,
            ApiError::Invitation(InvitationError::TemporaryUnavailable) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Rsvp(RsvpError::MissingInvitationSlugOrName)
            | ApiError::Rsvp(RsvpError::MissingSlug) => StatusCode::BAD_REQUEST,
            ApiError::Rsvp(RsvpError::TemporaryUnavailable) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            ok: false,
            error: self.to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}
