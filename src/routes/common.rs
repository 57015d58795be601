use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use serde_json::json;

use crate::{
    security::TokenServiceError,
    services::{
        CatalogServiceError, CatalogServiceErrorKind, IdentityServiceError,
        IdentityServiceErrorKind, ProfileServiceError,
        ProfileServiceErrorKind,
    },
};

pub fn message_response(
    status: StatusCode,
    message: impl Into<String>,
) -> Response {
    (
        status,
        Json(json!({
            "message": message.into(),
        })),
    )
        .into_response()
}

/// 500 body carrying the underlying detail, matching the service's
/// debug-friendly error contract.
pub fn internal_error_response(
    context: &str,
    error: impl std::fmt::Display,
) -> Response {
    let error = error.to_string();

    tracing::error!(%error, "{context}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "message": context,
            "error": error,
        })),
    )
        .into_response()
}

pub fn identity_error_response(
    context: &str,
    error: IdentityServiceError,
) -> Response {
    match error.kind() {
        IdentityServiceErrorKind::UsernameFormat
        | IdentityServiceErrorKind::PasswordFormat
        | IdentityServiceErrorKind::UsernameTaken
        | IdentityServiceErrorKind::EmailTaken
        | IdentityServiceErrorKind::InvalidTenantCode
        | IdentityServiceErrorKind::InvalidCredentials => {
            message_response(StatusCode::BAD_REQUEST, error.to_string())
        }
        _ => internal_error_response(context, error),
    }
}

pub fn profile_error_response(
    context: &str,
    error: ProfileServiceError,
) -> Response {
    match error.kind() {
        ProfileServiceErrorKind::IdentityDoesNotExist
        | ProfileServiceErrorKind::TenantDoesNotExist => {
            message_response(StatusCode::BAD_REQUEST, error.to_string())
        }
        _ => internal_error_response(context, error),
    }
}

pub fn catalog_error_response(
    context: &str,
    error: CatalogServiceError,
) -> Response {
    match error.kind() {
        CatalogServiceErrorKind::TenantDoesNotExist => {
            message_response(StatusCode::NOT_FOUND, error.to_string())
        }
        CatalogServiceErrorKind::ProductCodeTaken => {
            message_response(StatusCode::BAD_REQUEST, error.to_string())
        }
        _ => internal_error_response(context, error),
    }
}

/// Any verification failure, expired or otherwise, is a 403; only a
/// missing token is a 401 (handled by the extractor).
pub fn token_error_response(error: TokenServiceError) -> Response {
    message_response(StatusCode::FORBIDDEN, error.to_string())
}
