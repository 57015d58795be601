use axum::{Json, extract::State, response::IntoResponse, response::Response};
use axum_extra::routing::TypedPath;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    response::data::TokenData,
    routes::common::identity_error_response,
    services::Credentials,
    state::ServiceState,
};

#[derive(TypedPath, Deserialize)]
#[typed_path("/login")]
pub struct LoginPath;

#[derive(Deserialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginBody {
    pub username: String,
    pub password: String,
    pub company_code: String,
}

#[utoipa::path(
    post,
    path = "/login",
    description = "Authenticate and receive a bearer token",
    request_body = LoginBody,
    responses(
        (status = OK, description = "Login successful", body = TokenData),
        (status = BAD_REQUEST, description = "Bad credential combination"),
        (status = INTERNAL_SERVER_ERROR, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state, body))]
pub async fn login(
    _: LoginPath,
    State(state): State<ServiceState>,
    Json(body): Json<LoginBody>,
) -> Response {
    let result = state
        .provider
        .identity_service()
        .login(Credentials::new(
            body.username,
            body.password,
            body.company_code,
        ))
        .await;

    match result {
        Ok(token) => {
            Json(TokenData::new("Login successful", token)).into_response()
        }
        Err(e) => identity_error_response("Login failed", e),
    }
}
