mod login;
mod profile;
mod register;
mod retailer_register;

pub use login::*;
pub use profile::*;
pub use register::*;
pub use retailer_register::*;

use axum::Router;
use axum_extra::routing::RouterExt;
use utoipa::OpenApi;

use crate::state::ServiceState;

pub fn build_router() -> Router<ServiceState> {
    Router::new()
        .typed_post(register)
        .typed_post(retailer_register)
        .typed_post(login)
        .typed_get(profile)
}

#[derive(OpenApi)]
#[openapi(paths(register, retailer_register, login, profile))]
pub struct AuthApiDoc;
