use axum::{Json, extract::State, response::Response};
use axum_extra::routing::TypedPath;
use http::StatusCode;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    data::tenants::TenantKind,
    response::data::Message,
    routes::common::{identity_error_response, message_response},
    services::Registration,
    state::ServiceState,
};

#[derive(TypedPath, Deserialize)]
#[typed_path("/register")]
pub struct RegisterPath;

#[derive(Deserialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegisterBody {
    pub username: String,
    pub email: String,
    pub password: String,
    pub company_code: String,
}

#[utoipa::path(
    post,
    path = "/register",
    description = "Register a new user under a company code",
    request_body = RegisterBody,
    responses(
        (status = CREATED, description = "User registered", body = Message),
        (status = BAD_REQUEST, description = "Validation, uniqueness or company-code failure"),
        (status = INTERNAL_SERVER_ERROR, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state, body))]
pub async fn register(
    _: RegisterPath,
    State(state): State<ServiceState>,
    Json(body): Json<RegisterBody>,
) -> Response {
    let result = state
        .provider
        .identity_service()
        .register(Registration::new(
            body.username,
            body.email,
            body.password,
            body.company_code,
            TenantKind::Company,
        ))
        .await;

    match result {
        Ok(_) => message_response(
            StatusCode::CREATED,
            "User registered successfully",
        ),
        Err(e) => identity_error_response("Registration failed", e),
    }
}
