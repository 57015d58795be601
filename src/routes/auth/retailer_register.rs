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
#[typed_path("/retailer_register")]
pub struct RetailerRegisterPath;

#[derive(Deserialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RetailerRegisterBody {
    pub username: String,
    pub email: String,
    pub password: String,
    pub retailer_code: String,
}

#[utoipa::path(
    post,
    path = "/retailer_register",
    description = "Register a new user under a retailer code",
    request_body = RetailerRegisterBody,
    responses(
        (status = CREATED, description = "Retailer user registered", body = Message),
        (status = BAD_REQUEST, description = "Validation, uniqueness or retailer-code failure"),
        (status = INTERNAL_SERVER_ERROR, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state, body))]
pub async fn retailer_register(
    _: RetailerRegisterPath,
    State(state): State<ServiceState>,
    Json(body): Json<RetailerRegisterBody>,
) -> Response {
    let result = state
        .provider
        .identity_service()
        .register(Registration::new(
            body.username,
            body.email,
            body.password,
            body.retailer_code,
            TenantKind::Retailer,
        ))
        .await;

    match result {
        Ok(_) => message_response(
            StatusCode::CREATED,
            "Retailer registered successfully",
        ),
        Err(e) => identity_error_response("Retailer registration failed", e),
    }
}
