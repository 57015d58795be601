use std::{collections::HashMap, path::Path};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    data::tenants::{Tenant, TenantId, TenantKind},
    data_impl::in_memory::InMemoryDatabase,
    security::impls::{DEFAULT_BCRYPT_COST, DEFAULT_TOKEN_VALIDITY_DAYS},
};

/// Seed data for the tenant directory plus the security settings.
/// Tenants are provisioned out of band through this configuration and
/// are read-only at runtime.
#[derive(
    Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq, JsonSchema,
)]
pub struct Configuration {
    pub companies: HashMap<String, TenantConfiguration>,
    pub retailers: HashMap<String, TenantConfiguration>,
    pub security: SecurityConfiguration,
}

impl Configuration {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, eyre::Report> {
        let config = std::fs::read_to_string(path)?;
        let config: Configuration = serde_json::from_str(&config)?;

        Ok(config)
    }

    pub fn from_inline(config: impl AsRef<str>) -> Result<Self, eyre::Report> {
        let config: Configuration = serde_json::from_str(config.as_ref())?;

        Ok(config)
    }

    pub fn to_in_memory_database(&self) -> InMemoryDatabase {
        let db = InMemoryDatabase::default();
        db.next_identity_id
            .store(1, std::sync::atomic::Ordering::Relaxed);

        let mut tenants = db.tenants.write();

        let companies = self
            .companies
            .iter()
            .map(|(code, config)| (code, config, TenantKind::Company));
        let retailers = self
            .retailers
            .iter()
            .map(|(code, config)| (code, config, TenantKind::Retailer));

        for (id, (code, config, kind)) in
            companies.chain(retailers).enumerate()
        {
            tenants.push(Tenant::new(
                TenantId::new(id as u64),
                code.clone(),
                config.display_name.clone().unwrap_or(code.to_string()),
                kind,
            ));
        }

        drop(tenants);

        db
    }
}

#[derive(
    Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq, JsonSchema,
)]
pub struct TenantConfiguration {
    pub display_name: Option<String>,
    pub description: Option<String>,
}

#[derive(
    Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq, JsonSchema,
)]
pub struct SecurityConfiguration {
    /// Process-wide token signing secret.
    pub jwt_secret: String,

    #[serde(default)]
    pub token_validity_days: Option<i64>,

    #[serde(default)]
    pub bcrypt_cost: Option<u32>,
}

impl SecurityConfiguration {
    pub fn token_validity_days(&self) -> i64 {
        self.token_validity_days.unwrap_or(DEFAULT_TOKEN_VALIDITY_DAYS)
    }

    pub fn bcrypt_cost(&self) -> u32 {
        self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST)
    }
}
