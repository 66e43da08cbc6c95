// Maps use case failures onto HTTP responses.
//
// Every error body is `{"error": message}`. Storage details are logged and
// replaced by a generic message.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::modules::identity::use_cases::authenticate::handler::AuthError;
use crate::shared::core::errors::ApplicationError;

const INTERNAL_MESSAGE: &str = "internal server error";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not logged in")]
    Unauthenticated,

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    UnsupportedMediaType(String),

    #[error(transparent)]
    Application(#[from] ApplicationError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            missing @ JsonRejection::MissingJsonContentType(_) => {
                ApiError::UnsupportedMediaType(missing.body_text())
            }
            other => ApiError::BadRequest(other.body_text()),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::Unauthenticated => (StatusCode::UNAUTHORIZED, self.to_string()),
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),
            ApiError::UnsupportedMediaType(message) => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, message.clone())
            }
            ApiError::Application(e) => match e {
                ApplicationError::NotFound { entity, .. } => {
                    (StatusCode::NOT_FOUND, format!("{entity} not found"))
                }
                ApplicationError::Forbidden => (StatusCode::FORBIDDEN, "forbidden".into()),
                ApplicationError::Input(input) => {
                    (StatusCode::BAD_REQUEST, input.message().to_string())
                }
                ApplicationError::AlreadySubmitted => (StatusCode::CONFLICT, e.to_string()),
                ApplicationError::Storage(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.into())
                }
            },
            ApiError::Auth(e) => match e {
                AuthError::InvalidCredentials => (StatusCode::UNAUTHORIZED, e.to_string()),
                AuthError::MissingSession => (StatusCode::BAD_REQUEST, e.to_string()),
                AuthError::Storage(_) | AuthError::Hashing(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.into())
                }
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "request rejected");
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}
