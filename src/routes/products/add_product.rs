use axum::{Json, extract::State, response::Response};
use axum_extra::routing::TypedPath;
use http::StatusCode;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    response::data::Message,
    routes::common::{catalog_error_response, message_response},
    state::ServiceState,
};

#[derive(TypedPath, Deserialize)]
#[typed_path("/add")]
pub struct AddProductPath;

#[derive(Deserialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddProductBody {
    pub company_name: String,
    pub product_code: String,
    /// Defaults to the unset state.
    #[serde(default)]
    pub status: i32,
}

#[utoipa::path(
    post,
    path = "/add",
    description = "Add a product to a tenant's catalog collection",
    request_body = AddProductBody,
    responses(
        (status = CREATED, description = "Product added", body = Message),
        (status = BAD_REQUEST, description = "Duplicate product code"),
        (status = NOT_FOUND, description = "Unknown tenant"),
        (status = INTERNAL_SERVER_ERROR, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state, body))]
pub async fn add_product(
    _: AddProductPath,
    State(state): State<ServiceState>,
    Json(body): Json<AddProductBody>,
) -> Response {
    let result = state
        .provider
        .catalog_service()
        .add_product(&body.company_name, &body.product_code, body.status)
        .await;

    match result {
        Ok(()) => message_response(
            StatusCode::CREATED,
            "Product added successfully",
        ),
        Err(e) => catalog_error_response("Failed to add product", e),
    }
}
