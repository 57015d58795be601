mod add_product;

pub use add_product::*;

use axum::Router;
use axum_extra::routing::RouterExt;
use utoipa::OpenApi;

use crate::state::ServiceState;

pub fn build_router() -> Router<ServiceState> {
    Router::new().typed_post(add_product)
}

#[derive(OpenApi)]
#[openapi(paths(add_product))]
pub struct ProductsApiDoc;
