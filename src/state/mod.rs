use std::sync::Arc;

use derive_new::new;

use crate::{
    args::{ConfigType, ServeArgs},
    config::Configuration,
    providers::{DependencyProvider, InMemoryDependencyProvider},
};

#[derive(new, Clone)]
pub struct ServiceState {
    pub args: Arc<ServeArgs>,
    pub provider: Arc<dyn DependencyProvider>,
}

impl ServiceState {
    pub async fn from_args(args: &ServeArgs) -> eyre::Result<Self> {
        let mut config = match (&args.config, args.config_type) {
            (Some(config), ConfigType::File) => {
                Configuration::from_file(config)?
            }
            (Some(config), ConfigType::Inline) => {
                Configuration::from_inline(config)?
            }
            (None, _) => Configuration::default(),
        };

        if let Some(secret) = &args.jwt_secret {
            config.security.jwt_secret = secret.clone();
        }

        eyre::ensure!(
            !config.security.jwt_secret.is_empty(),
            "a token signing secret is required, set it in the \
             configuration or via JWT_SECRET"
        );

        let db = Arc::new(config.to_in_memory_database());

        Ok(Self {
            args: Arc::new(args.clone()),
            provider: Arc::new(InMemoryDependencyProvider::new(
                db,
                config.security.clone(),
            )),
        })
    }
}
