pub mod args;
pub mod config;
pub mod data;
pub mod data_impl;
pub mod extractors;
mod init_tracing;
pub mod providers;
pub mod response;
pub mod routes;
pub mod security;
pub mod services;
pub mod state;

use clap::Parser;
use tokio::net::TcpListener;

use crate::{
    args::{Cli, CliSubcommands},
    routes::root::RouterConfig,
    state::ServiceState,
};

#[tokio::main(flavor = "multi_thread")]
pub async fn main() -> eyre::Result<()> {
    init_tracing::init_tracing()?;

    let cli = Cli::parse();
    let CliSubcommands::Serve(serve) = cli.subcommand;
    let args = serve.args;

    let state = ServiceState::from_args(&args).await?;

    let route_config = args
        .routes
        .clone()
        .unwrap_or_else(|| RouterConfig::new(Some("/api".to_string()), true));
    let router = routes::root::build_router(&route_config).with_state(state);

    let socket = TcpListener::bind(&args.listen).await?;

    tracing::info!(listen = %args.listen, "serving");

    axum::serve(socket, router).await?;

    Ok(())
}
