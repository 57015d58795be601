use axum::{Router, routing::get};
use derive_new::new;
use utoipa::OpenApi;

use crate::{
    routes::{auth, open_api, products},
    state::ServiceState,
};

#[derive(clap::Args, Clone, Debug, new)]
pub struct RouterConfig {
    #[arg(
        long,
        help = "Path prefix the API routes are nested under",
        default_value = "/api"
    )]
    pub api_prefix: Option<String>,

    #[arg(
        long,
        default_value = "true",
        help = "Whether to serve the OpenAPI document"
    )]
    pub docs: bool,
}

pub fn build_router(config: &RouterConfig) -> Router<ServiceState> {
    let api_prefix = config.api_prefix.as_deref().unwrap_or("/api");

    let mut api = Router::new()
        .nest("/auth", auth::build_router())
        .nest("/products", products::build_router());

    if config.docs {
        api = api.nest("/docs", open_api::build_router());
    }

    Router::new().route("/", get(index)).nest(api_prefix, api)
}

async fn index() -> &'static str {
    "Welcome to the authentication API!"
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "tenauth-service",
        description = "Tenant-scoped authentication and product catalog service",
    ),
    nest(
        (path = "/auth", api = auth::AuthApiDoc),
        (path = "/products", api = products::ProductsApiDoc),
    )
)]
pub struct RootApiDoc;
