use tracing_subscriber::EnvFilter;

pub fn init_tracing() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
        .map_err(|e| eyre::eyre!(e))?;

    Ok(())
}
