use axum::{Json, extract::State, response::IntoResponse, response::Response};
use axum_extra::routing::TypedPath;
use serde::Deserialize;

use crate::{
    data::identities::IdentityId,
    extractors::BearerToken,
    response::data::ProfileData,
    routes::common::{profile_error_response, token_error_response},
    state::ServiceState,
};

#[derive(TypedPath, Deserialize)]
#[typed_path("/profile")]
pub struct ProfilePath;

#[utoipa::path(
    get,
    path = "/profile",
    description = "Profile of the authenticated user, joined with its tenant",
    params(
        ("Authorization" = String, Header, description = "Bearer token"),
    ),
    responses(
        (status = OK, description = "Profile retrieved", body = ProfileData),
        (status = BAD_REQUEST, description = "User or tenant not found"),
        (status = UNAUTHORIZED, description = "No token provided"),
        (status = FORBIDDEN, description = "Invalid or expired token"),
        (status = INTERNAL_SERVER_ERROR, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state, token))]
pub async fn profile(
    _: ProfilePath,
    State(state): State<ServiceState>,
    BearerToken(token): BearerToken,
) -> Response {
    let claims = match state.provider.token_service().verify(&token) {
        Ok(claims) => claims,
        Err(e) => return token_error_response(e),
    };

    let result = state
        .provider
        .profile_service()
        .get_profile(IdentityId::new(claims.identity_id))
        .await;

    match result {
        Ok(profile) => Json(ProfileData::new(
            "Profile retrieved successfully",
            profile,
        ))
        .into_response(),
        Err(e) => profile_error_response("Profile retrieval failed", e),
    }
}
