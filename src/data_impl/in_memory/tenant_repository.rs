use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;

use crate::{
    data::tenants::{Tenant, TenantRepository, TenantRepositoryError},
    data_impl::in_memory::data::InMemoryDatabase,
};

#[derive(Debug, Clone, new)]
pub struct InMemoryTenantRepository {
    db: Arc<InMemoryDatabase>,
}

#[async_trait]
impl TenantRepository for InMemoryTenantRepository {
    async fn find_by_code(
        &self,
        code: &str,
    ) -> Result<Option<Tenant>, TenantRepositoryError> {
        Ok(self
            .db
            .tenants
            .read()
            .iter()
            .find(|tenant| tenant.code == code)
            .cloned())
    }

    async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Tenant>, TenantRepositoryError> {
        Ok(self
            .db
            .tenants
            .read()
            .iter()
            .find(|tenant| tenant.name == name)
            .cloned())
    }
}
